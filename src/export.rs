use crate::core::generate::SampleSet;

/// Reshape a sample set as delimited text: one column per period in
/// period order, one data row per observation.
pub fn dataset_csv(set: &SampleSet) -> String {
    let header: Vec<String> = set.periods().iter().map(i32::to_string).collect();
    let mut out = header.join(",");
    out.push('\n');

    for row in 0..set.sample_count() {
        for (col, (_, sample)) in set.iter().enumerate() {
            if col > 0 {
                out.push(',');
            }
            out.push_str(&format!("{:.6}", sample[row]));
        }
        out.push('\n');
    }
    out
}
