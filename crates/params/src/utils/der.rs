//! ASN.1 DER tags and length-form markers

/// Universal tag for INTEGER
pub const TAG_INTEGER: u8 = 0x02;

/// Universal constructed tag for SEQUENCE
pub const TAG_SEQUENCE: u8 = 0x30;

/// Set in the first length octet when the long form is used
pub const LONG_FORM_LENGTH: u8 = 0x80;

/// Largest length that fits the short form
pub const MAX_SHORT_FORM_LENGTH: usize = 0x7F;

/// Value of the guard byte prepended to non-negative INTEGERs whose first
/// value byte has the high bit set
pub const INTEGER_GUARD_BYTE: u8 = 0x00;

/// High bit of the first INTEGER value byte (the sign bit)
pub const INTEGER_SIGN_BIT: u8 = 0x80;
