use crate::constants::embed::{
    FOOTER_TEXT, LOSS_COLOUR, MAX_FIELD_VALUE_CHARS, MAX_FIELDS, START_TIME_FORMAT, WIN_COLOUR,
};
use crate::data_fetcher::models::MatchSummary;
use serde_json::Value;
use tracing::warn;

/// One name/value pair shown under the embed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich message describing one match, independent of the chat library.
///
/// The send timestamp is not part of the model; it is stamped when the
/// message goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEmbed {
    pub title: String,
    pub description: String,
    pub colour: u32,
    pub fields: Vec<EmbedField>,
    pub footer: String,
}

/// Builds the embed for a match summary.
///
/// At most 25 stats become fields; the rest are dropped with a warning.
pub fn build_match_embed(summary: &MatchSummary) -> MatchEmbed {
    let title = format!("{} — {}", summary.handle, summary.rank_label());
    let description = format!(
        "Result: **{}** • Map: **{}** • {}",
        summary.result_label(),
        summary.map_name,
        summary.start_time.format(START_TIME_FORMAT)
    );
    let colour = if summary.won { WIN_COLOUR } else { LOSS_COLOUR };

    if summary.stat_fields.len() > MAX_FIELDS {
        warn!(
            "Match {} has {} stat fields, only the first {} are shown",
            summary.match_id,
            summary.stat_fields.len(),
            MAX_FIELDS
        );
    }

    let fields = summary
        .stat_fields
        .iter()
        .take(MAX_FIELDS)
        .map(|(key, value)| EmbedField {
            name: format_stat_name(key),
            value: format_stat_value(value),
            inline: true,
        })
        .collect();

    MatchEmbed {
        title,
        description,
        colour,
        fields,
        footer: FOOTER_TEXT.to_string(),
    }
}

/// Field name for a stat key: underscores become spaces, then every run of
/// letters is capitalised.
///
/// # Example
/// ```
/// use lastmatch_bot::presenter::format_stat_name;
///
/// assert_eq!(format_stat_name("damage_made"), "Damage Made");
/// assert_eq!(format_stat_name("kills"), "Kills");
/// ```
pub fn format_stat_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    let mut in_word = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            name.push(c);
            in_word = false;
        }
    }
    name
}

/// Field value for a stat. Strings are shown as-is, anything else as JSON text.
/// Values are cut to the platform's field limit.
pub fn format_stat_value(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    // blank values are rejected by Discord
    if text.trim().is_empty() {
        return "-".to_string();
    }
    truncate_chars(&text, MAX_FIELD_VALUE_CHARS)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{MatchId, PlayerHandle};
    use crate::data_fetcher::tiers::CompetitiveTier;
    use chrono::{TimeZone, Utc};
    use serde_json::{Map, json};

    fn summary(won: bool, stats: Value) -> MatchSummary {
        let Value::Object(stat_fields) = stats else {
            panic!("stats must be an object");
        };
        MatchSummary {
            handle: PlayerHandle::new("Alice", "1234").unwrap(),
            match_id: MatchId::new("M1"),
            rank: CompetitiveTier::Gold1,
            won,
            map_name: "Ascent".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 1, 15, 18, 30, 5).unwrap(),
            stat_fields,
        }
    }

    #[test]
    fn test_embed_title_description_and_colour() {
        let embed = build_match_embed(&summary(false, json!({"kills": 3})));
        assert_eq!(embed.title, "Alice#1234 — Gold 1");
        assert_eq!(
            embed.description,
            "Result: **Loss** • Map: **Ascent** • 2024-01-15 18:30:05"
        );
        assert_eq!(embed.colour, 0xFF0000);
        assert_eq!(embed.footer, "Data via Riot Games API");

        let embed = build_match_embed(&summary(true, json!({"kills": 3})));
        assert!(embed.description.starts_with("Result: **Win**"));
        assert_eq!(embed.colour, 0x00FF00);
    }

    #[test]
    fn test_embed_fields_follow_stat_order() {
        let embed = build_match_embed(&summary(
            false,
            json!({"kills": 3, "deaths": 10, "assists": 2, "first_bloods": 1}),
        ));
        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Kills", "Deaths", "Assists", "First Bloods"]);
        assert_eq!(embed.fields[1].value, "10");
        assert!(embed.fields.iter().all(|f| f.inline));
    }

    #[test]
    fn test_embed_field_cap() {
        let mut stats = Map::new();
        for i in 0..30 {
            stats.insert(format!("stat_{i}"), json!(i));
        }
        let embed = build_match_embed(&summary(true, Value::Object(stats)));
        assert_eq!(embed.fields.len(), MAX_FIELDS);
        assert_eq!(embed.fields[0].name, "Stat 0");
        assert_eq!(embed.fields[24].name, "Stat 24");
    }

    #[test]
    fn test_format_stat_name() {
        assert_eq!(format_stat_name("kills"), "Kills");
        assert_eq!(format_stat_name("damage_made"), "Damage Made");
        assert_eq!(format_stat_name("playtimeMillis"), "Playtimemillis");
        assert_eq!(format_stat_name("abilities_2x"), "Abilities 2X");
        assert_eq!(format_stat_name("SCORE"), "Score");
    }

    #[test]
    fn test_format_stat_value() {
        assert_eq!(format_stat_value(&json!(10)), "10");
        assert_eq!(format_stat_value(&json!(1.5)), "1.5");
        assert_eq!(format_stat_value(&json!("Jett")), "Jett");
        assert_eq!(format_stat_value(&json!(true)), "true");
        assert_eq!(format_stat_value(&json!(null)), "null");
        assert_eq!(format_stat_value(&json!({"grenade": 2})), r#"{"grenade":2}"#);
        assert_eq!(format_stat_value(&json!("")), "-");
    }

    #[test]
    fn test_long_value_is_truncated() {
        let value = format_stat_value(&json!("x".repeat(2000)));
        assert_eq!(value.chars().count(), MAX_FIELD_VALUE_CHARS);
        assert!(value.ends_with('…'));
    }
}
