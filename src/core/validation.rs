//! Input classification for incoming chat text
//!
//! Only Spotify web links are accepted. The check is a plain pattern match;
//! spotdl does its own URL parsing afterwards.

use lazy_regex::regex_is_match;

/// Returns true if `text` contains a Spotify web link.
///
/// Accepts an optional `http://`/`https://` scheme and an optional `www.`
/// in front of `open.spotify.com/`. Case-sensitive, matched anywhere in the
/// text.
///
/// # Examples
/// ```
/// use spotdora::core::validation::is_spotify_link;
///
/// assert!(is_spotify_link("https://open.spotify.com/track/abc123"));
/// assert!(is_spotify_link("open.spotify.com/album/xyz"));
/// assert!(!is_spotify_link("hello there"));
/// ```
pub fn is_spotify_link(text: &str) -> bool {
    regex_is_match!(r"(https?://)?(www\.)?open\.spotify\.com/", text)
}
