/// Block reference token, `[[block:<id>]]`.
pub struct BlockRef;

impl BlockRef {
    pub const OPEN: &'static [u8; 8] = b"[[block:";
    pub const CLOSE: &'static [u8; 2] = b"]]";

    /// Ids are drawn from `[A-Za-z0-9_-]`.
    pub fn is_id_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_alphabet() {
        assert!("intro_2-b".bytes().all(BlockRef::is_id_byte));
        assert!(!BlockRef::is_id_byte(b' '));
        assert!(!BlockRef::is_id_byte(b']'));
        assert!(!BlockRef::is_id_byte(b'.'));
    }
}
