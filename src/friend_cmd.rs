//! Friend command: decode the color hidden in a challenge link.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};
use url::Url;

use oracle_cipher::decode;

use crate::cli::FriendArgs;
use crate::config::OracleConfig;

/// Run the friend-challenge decoding pipeline.
pub fn run(args: FriendArgs) -> Result<()> {
    let _cmd = info_span!("friend").entered();

    let config = OracleConfig::load(args.config.as_deref())?;
    let key = args.key.unwrap_or(config.key);

    let token = match (args.token, args.link) {
        (Some(token), _) => token,
        (None, Some(link)) => extract_token(&link)?,
        (None, None) => bail!("no challenge link given; pass a share URL or --token"),
    };
    info!(token = %token, "decoding challenge token");

    let color = decode(&token, &key)
        .with_context(|| format!("failed to decode challenge token '{token}'"))?;

    println!("{color}");
    Ok(())
}

/// Pulls the encoded `c` query parameter out of a share link.
fn extract_token(link: &str) -> Result<String> {
    let url = Url::parse(link).with_context(|| format!("invalid challenge link: {link}"))?;
    let token = url
        .query_pairs()
        .find(|(name, _)| name == "c")
        .map(|(_, value)| value.into_owned());
    match token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => bail!("challenge link has no 'c' parameter: {link}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_share_link() {
        let token = extract_token("https://colordle.ryantanen.com/?c=ujq").unwrap();
        assert_eq!(token, "ujq");
    }

    #[test]
    fn extracts_token_among_other_parameters() {
        let token =
            extract_token("https://colordle.ryantanen.com/?ref=discord&c=h3x&lang=en").unwrap();
        assert_eq!(token, "h3x");
    }

    #[test]
    fn missing_parameter_is_an_error() {
        let err = extract_token("https://colordle.ryantanen.com/").unwrap_err();
        assert!(err.to_string().contains("no 'c' parameter"));
    }

    #[test]
    fn empty_parameter_is_an_error() {
        assert!(extract_token("https://colordle.ryantanen.com/?c=").is_err());
    }

    #[test]
    fn unparseable_link_is_an_error() {
        let err = extract_token("not a url").unwrap_err();
        assert!(err.to_string().contains("invalid challenge link"));
    }
}
