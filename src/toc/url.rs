use std::fmt;

/// The five components of a (possibly relative) URL.
///
/// Every component is stored without its separator, so `query` never starts with `?`
/// and `fragment` never starts with `#`. An empty `netloc` marks the URL as relative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl UrlComponents {
    /// Parses `raw` without any fallback context.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_fallback(raw, None, None)
    }

    /// Parses `raw`, borrowing a scheme (and optionally a host) when the input
    /// is missing them.
    ///
    /// * A full URL (`scheme:...`) is parsed as-is and the fallbacks are ignored.
    /// * Without a fallback scheme the input is parsed as-is.
    /// * A path starting with `/` is placed on the fallback host, if there is one.
    /// * Anything else is assumed to start with a host and only gets the scheme.
    pub fn parse_with_fallback(
        raw: &str,
        fallback_scheme: Option<&str>,
        fallback_netloc: Option<&str>,
    ) -> Self {
        if split_scheme(raw).is_some() {
            return split(raw);
        }

        match (fallback_scheme, fallback_netloc) {
            (None, _) => split(raw),
            (Some(scheme), Some(netloc)) if raw.starts_with('/') => {
                split(&format!("{scheme}{netloc}{raw}"))
            }
            (Some(_), None) if raw.starts_with('/') => split(raw),
            (Some(scheme), _) => split(&format!("{scheme}{raw}")),
        }
    }

    /// Whether the host is non-empty and ends with `suffix`.
    ///
    /// This is a plain string suffix test, so `notwikipedia.org` matches `wikipedia.org`.
    pub fn matches_domain(&self, suffix: &str) -> bool {
        !self.netloc.is_empty() && self.netloc.ends_with(suffix)
    }

    pub fn is_relative(&self) -> bool {
        self.netloc.is_empty()
    }

    /// Fills the scheme, host, path and query from `reference`, in that order, for
    /// as long as they are empty here. Once this URL supplies one of them, the
    /// later ones are no longer inherited, so `/wiki/Other` does not pick up the
    /// reference query. The fragment always comes from `self`.
    pub fn resolve_against(&self, reference: &UrlComponents) -> UrlComponents {
        let mut inherit = true;
        let mut pick = |own: &str, fallback: &str| -> String {
            if inherit && own.is_empty() {
                fallback.to_string()
            } else {
                inherit = false;
                own.to_string()
            }
        };

        UrlComponents {
            scheme: pick(&self.scheme, &reference.scheme),
            netloc: pick(&self.netloc, &reference.netloc),
            path: pick(&self.path, &reference.path),
            query: pick(&self.query, &reference.query),
            fragment: self.fragment.clone(),
        }
    }

    pub fn without_scheme(mut self) -> Self {
        self.scheme.clear();
        self
    }
}

impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }

        if !self.netloc.is_empty() {
            write!(f, "//{}", self.netloc)?;
            if !self.path.is_empty() && !self.path.starts_with('/') {
                f.write_str("/")?;
            }
        }

        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }

        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }

        Ok(())
    }
}

/// Returns `(scheme, rest)` when `raw` starts with a scheme token followed by `:`.
///
/// `host:8080` is treated as a host and port rather than a scheme.
fn split_scheme(raw: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = raw.split_once(':')?;

    let mut chars = scheme.chars();
    if !chars.next()?.is_ascii_alphabetic() {
        return None;
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }

    if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some((scheme, rest))
}

fn split(raw: &str) -> UrlComponents {
    let mut url = UrlComponents::default();

    let mut rest = match split_scheme(raw) {
        Some((scheme, rest)) => {
            url.scheme = scheme.to_ascii_lowercase();
            rest
        }
        None => raw,
    };

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        url.netloc = after[..end].to_string();
        rest = &after[end..];
    }

    if let Some((before, fragment)) = rest.split_once('#') {
        url.fragment = fragment.to_string();
        rest = before;
    }

    if let Some((before, query)) = rest.split_once('?') {
        url.query = query.to_string();
        rest = before;
    }

    url.path = rest.to_string();
    url
}
