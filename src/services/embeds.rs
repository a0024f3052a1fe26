use url::Url;

/// Platforms whose players may be embedded on the public site.
pub const ALLOWED_EMBED_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "youtu.be",
    "music.youtube.com",
    "bandcamp.com",
    "soundcloud.com",
    "w.soundcloud.com",
    "open.spotify.com",
];

/// Check a media embed URL against the allow-list.
///
/// Absent or empty URLs pass (the field is optional); an unparsable URL is
/// rejected. A host matches when it equals an allowed host or is one of its
/// subdomains.
pub fn is_allowed_embed_url(candidate: Option<&str>) -> bool {
    let Some(candidate) = candidate.filter(|c| !c.is_empty()) else {
        return true;
    };
    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    ALLOWED_EMBED_HOSTS
        .iter()
        .any(|allowed| host == *allowed || host.ends_with(&format!(".{allowed}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_is_allowed() {
        assert!(is_allowed_embed_url(None));
        assert!(is_allowed_embed_url(Some("")));
    }

    #[test]
    fn allowed_hosts_pass() {
        assert!(is_allowed_embed_url(Some("https://www.youtube.com/watch?v=x")));
        assert!(is_allowed_embed_url(Some("https://youtu.be/x")));
        assert!(is_allowed_embed_url(Some("https://open.spotify.com/track/x")));
    }

    #[test]
    fn subdomains_of_allowed_hosts_pass() {
        assert!(is_allowed_embed_url(Some("https://someband.bandcamp.com/album/x")));
    }

    #[test]
    fn other_hosts_are_rejected() {
        assert!(!is_allowed_embed_url(Some("https://example.com/embed")));
        // Suffix tricks do not count as subdomains
        assert!(!is_allowed_embed_url(Some("https://notyoutube.com/x")));
        assert!(!is_allowed_embed_url(Some("https://evilyoutu.be.example.com/x")));
    }

    #[test]
    fn unparsable_urls_are_rejected() {
        assert!(!is_allowed_embed_url(Some("not a url")));
    }
}
