/// Lines this short after trimming are stray numbering or blank separators
const MIN_STEP_CHARS: usize = 3;

/// Split instruction text into cook-mode steps.
///
/// Splits on `\r\n` or `\n` and drops every line whose trimmed length is two
/// characters or less. Surviving lines keep their order and original text.
pub fn split_instructions(instructions: Option<&str>) -> Vec<String> {
    let Some(text) = instructions else {
        return Vec::new();
    };

    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| line.trim().chars().count() >= MIN_STEP_CHARS)
        .map(str::to_string)
        .collect()
}
