/// A serializable summary of one extraction call, for callers that persist
/// usage-analytics results.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ExtractionReport {
    /// The deduplicated coordinates, in production order.
    pub coordinates: Vec<String>,

    /// How many operations the document defined.
    pub operation_count: usize,
}
