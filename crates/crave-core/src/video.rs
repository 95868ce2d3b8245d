use regex::Regex;
use std::sync::OnceLock;

/// YouTube ids are always this long
const VIDEO_ID_LEN: usize = 11;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

fn video_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("video id pattern is valid")
    })
}

/// Pull the video identifier out of a YouTube link.
///
/// Returns `None` unless the captured id is exactly 11 characters.
pub fn extract_video_id(url: &str) -> Option<String> {
    let caps = video_regex().captures(url)?;
    let id = caps.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then(|| id.to_string())
}

/// Player URL for an extracted id
pub fn embed_url(video_id: &str) -> String {
    format!("{}{}", EMBED_BASE, video_id)
}
