pub struct Strikethrough;

impl Strikethrough {
    pub const MARKER: &'static [u8; 2] = b"~~";
}
