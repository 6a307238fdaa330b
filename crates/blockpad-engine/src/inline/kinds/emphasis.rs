/// Strong emphasis, `**text**`.
pub struct Bold;

impl Bold {
    pub const MARKER: &'static [u8; 2] = b"**";
}

/// Emphasis, `*text*`. A star adjacent to another star belongs to bold.
pub struct Italic;

impl Italic {
    pub const MARKER: u8 = b'*';
}
