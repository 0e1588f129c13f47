use url::Url;

/// Extract the lookup key for the reputation table from a raw URL.
///
/// The key is the network location (host, plus the port when it is explicit
/// and not the scheme default) with one leading `www.` label removed.
/// Anything that does not parse as an absolute URL with a host yields `None`.
pub fn normalize(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let host = url.host_str()?.trim();
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        return None;
    }

    Some(with_port(host, url.port()))
}

/// Bring a reputation-table key into the form [`normalize`] produces:
/// lowercase, punycode for Unicode hosts, default `:80` dropped.
///
/// No `www.` stripping; keys are taken to be already stripped. A key that
/// does not parse as a host is kept as written (it can never match).
pub fn canonical_key(key: &str) -> String {
    let key = key.trim();
    Url::parse(&format!("http://{key}/"))
        .ok()
        .and_then(|url| Some(with_port(url.host_str()?, url.port())))
        .unwrap_or_else(|| key.to_string())
}

fn with_port(host: &str, port: Option<u16>) -> String {
    match port {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
