//! Term description decode and term key encode.

/// Fields of a term description: "2025 Summer Term I" carries year "2025",
/// season "Summer", roman index "I".
///
/// The raw tokens are stored verbatim; unknown seasons and roman indices
/// degrade at encode time instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermDescriptor {
    pub year: String,
    pub season: String,
    pub roman: String,
}

/// Decode result. The unparsed arm forces callers to handle malformed input
/// explicitly instead of sniffing string shapes downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedTerm {
    Decoded(TermDescriptor),
    Unparsed(String),
}

impl DecodedTerm {
    pub fn descriptor(&self) -> Option<&TermDescriptor> {
        match self {
            Self::Decoded(descriptor) => Some(descriptor),
            Self::Unparsed(_) => None,
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded(_))
    }
}

/// Decode a free-text term description.
///
/// Succeeds only for exactly four whitespace-separated tokens: year, season,
/// the "Term" slot, roman index. Any other shape passes through unchanged.
pub fn decode(text: &str) -> DecodedTerm {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [year, season, _term, roman] => DecodedTerm::Decoded(TermDescriptor {
            year: (*year).to_string(),
            season: (*season).to_string(),
            roman: (*roman).to_string(),
        }),
        _ => DecodedTerm::Unparsed(text.to_string()),
    }
}

/// Encode a descriptor and section number as a compact term key,
/// `"{year}_{section:02}_{seasonCode}{termNumber}"`.
pub fn encode(descriptor: &TermDescriptor, section: u32) -> String {
    format!(
        "{}_{:02}_{}{}",
        descriptor.year,
        section,
        season_code(&descriptor.season),
        term_number(&descriptor.roman)
    )
}

/// Parse a well-formed term key back into its descriptor and section.
///
/// Inverse of [`encode`]: `encode(&d, s) == k` for every `(d, s)` returned
/// from `parse_key(k)`. Returns `None` for anything key-shaped only loosely.
pub fn parse_key(key: &str) -> Option<(TermDescriptor, u32)> {
    let mut parts = key.split('_');
    let year = parts.next()?;
    let section = parts.next()?;
    let tail = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if year.is_empty() || !year.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    if section.len() != 2 || !section.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let section: u32 = section.parse().ok()?;
    if section == 0 {
        return None;
    }
    if tail.len() != 3 {
        return None;
    }
    let (code, number) = tail.split_at(2);
    let season = season_name(code)?;
    let roman = roman_index(number.parse().ok()?)?;
    Some((
        TermDescriptor {
            year: year.to_string(),
            season: season.to_string(),
            roman: roman.to_string(),
        },
        section,
    ))
}

fn season_code(season: &str) -> String {
    match season.to_ascii_lowercase().as_str() {
        "spring" => "SP".to_string(),
        "summer" => "SU".to_string(),
        "fall" => "FA".to_string(),
        "winter" => "WI".to_string(),
        // Unknown seasons keep their first two characters, uppercased.
        _ => season.chars().take(2).collect::<String>().to_uppercase(),
    }
}

fn term_number(roman: &str) -> u8 {
    match roman.to_ascii_uppercase().as_str() {
        "I" => 1,
        "II" => 2,
        "III" => 3,
        "IV" => 4,
        _ => 1,
    }
}

fn season_name(code: &str) -> Option<&'static str> {
    match code {
        "SP" => Some("Spring"),
        "SU" => Some("Summer"),
        "FA" => Some("Fall"),
        "WI" => Some("Winter"),
        _ => None,
    }
}

fn roman_index(number: u8) -> Option<&'static str> {
    match number {
        1 => Some("I"),
        2 => Some("II"),
        3 => Some("III"),
        4 => Some("IV"),
        _ => None,
    }
}
