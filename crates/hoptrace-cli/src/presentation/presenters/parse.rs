use crate::presentation::presenters::hop_rows;
use crate::presentation::view_models::{
    CommandResultViewModel, LineViewModel, ParseViewModel, count_label,
};
use hoptrace_parser::ClassifiedLine;
use hoptrace_types::HopObservation;

pub fn present_parse(
    hops: &[HopObservation],
    lines: Option<&[ClassifiedLine]>,
) -> CommandResultViewModel<ParseViewModel> {
    let lines = lines.map(|lines| {
        lines
            .iter()
            .map(|line| LineViewModel {
                line_number: line.line_number,
                kind: line.kind.as_str().to_string(),
                text: line.text.clone(),
                hop: line.hop.as_ref().map(|h| h.hop_number),
            })
            .collect()
    });

    let content = ParseViewModel {
        hops: hop_rows(hops),
        lines,
    };
    if hops.is_empty() {
        CommandResultViewModel::warning(content, "No hops recognised")
    } else {
        CommandResultViewModel::success(content, count_label(hops.len(), "hop"))
    }
}
