use crate::decoration::Decoration;

/// Validates an assembled decoration set against the document length.
///
/// Asserts that:
/// - Every span is ordered (`start <= end`)
/// - Every span lies within the document
/// - The set is sorted by start offset
///
/// # Panics
/// A violation is a programming defect in the engine, never a runtime
/// condition, so it panics with a descriptive message.
pub fn check(decorations: &[Decoration], doc_len: usize) {
    for d in decorations {
        let span = d.span();
        assert!(
            span.start <= span.end && span.end <= doc_len,
            "decoration span out of bounds: {span:?} (document len: {doc_len})"
        );
    }
    assert!(
        decorations
            .windows(2)
            .all(|w| w[0].span().start <= w[1].span().start),
        "decorations not sorted by start offset"
    );
}
