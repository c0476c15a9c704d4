//! Constellation names: one random prefix followed by one random postfix.

use heapless::String;

use crate::config::{NAME_CAPACITY, TITLE_CAPACITY, TITLE_LABEL};
use crate::error::ConfigError;
use crate::rng::RandomSource;

/// A generated name such as `"Nebula"` or `"Xequest"`.
pub type ConstellationName = String<NAME_CAPACITY>;

/// Text shown on the title card.
pub type TitleText = String<TITLE_CAPACITY>;

/// Compose `"<prefix><postfix>"` from one random entry of each list.
///
/// Lists are authored short enough to always fit, so an overflow is reported
/// as a configuration error rather than truncated.
pub fn generate_name<R>(
    rng: &mut R,
    prefixes: &[&str],
    postfixes: &[&str],
) -> Result<ConstellationName, ConfigError>
where
    R: RandomSource + ?Sized,
{
    if prefixes.is_empty() {
        return Err(ConfigError::EmptyList("prefix"));
    }
    if postfixes.is_empty() {
        return Err(ConfigError::EmptyList("postfix"));
    }

    let prefix = prefixes[rng.next_uint(prefixes.len() as u32) as usize];
    let postfix = postfixes[rng.next_uint(postfixes.len() as u32) as usize];

    let mut name = ConstellationName::new();
    push_all(&mut name, &[prefix, postfix])?;
    Ok(name)
}

/// Title card text for `name`: the label line followed by the name.
pub fn title_text(name: &str) -> Result<TitleText, ConfigError> {
    let mut title = TitleText::new();
    push_all(&mut title, &[TITLE_LABEL, name])?;
    Ok(title)
}

fn push_all<const N: usize>(
    out: &mut String<N>,
    parts: &[&str],
) -> Result<(), ConfigError> {
    let len: usize = parts.iter().map(|p| p.len()).sum();
    if len > N {
        return Err(ConfigError::NameTooLong { len, capacity: N });
    }
    for part in parts {
        out.push_str(part).map_err(|_| ConfigError::NameTooLong { len, capacity: N })?;
    }
    Ok(())
}
