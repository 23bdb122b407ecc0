//! Rule-based sentiment analyzer.
//!
//! Follows the VADER heuristics: lexicon valences adjusted by capitalization,
//! booster words, negation within a three-word window, "but" contrast, and
//! exclamation/question emphasis. The summed valence is normalized into the
//! compound score with `x / sqrt(x^2 + 15)`.

use super::lexicon::Lexicon;
use super::{AnalyzerError, PolarityScores, SentimentAnalyzer};
use regex::Regex;
use std::sync::Arc;

lazy_static::lazy_static! {
    /// Punctuation at either end of a token (apostrophes are kept for contractions)
    static ref RE_EDGE_PUNCT: Regex = Regex::new(r"^[^\w']+|[^\w']+$").unwrap();
}

/// Valence added to an ALL-CAPS sentiment word in mixed-case text.
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a negated valence.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant of the compound score.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Lexicon/rule-based analyzer.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconAnalyzer {
    /// Analyzer over the shared built-in lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::shared(),
        }
    }

    /// Analyzer over a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Per-token valences after all word-level rules.
    fn token_valences(&self, tokens: &[String]) -> Vec<f64> {
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let caps_differential = has_caps_differential(tokens);

        let mut valences = Vec::with_capacity(tokens.len());
        for (i, word) in lower.iter().enumerate() {
            if self.lexicon.booster(word).is_some() {
                valences.push(0.0);
                continue;
            }
            let Some(mut valence) = self.lexicon.valence(word) else {
                valences.push(0.0);
                continue;
            };

            if caps_differential && is_all_caps(&tokens[i]) {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            for distance in 1..=3usize {
                if i < distance {
                    break;
                }
                let previous = &lower[i - distance];
                if self.lexicon.valence(previous).is_some() {
                    continue;
                }
                let mut boost = self.booster_scalar(previous, &tokens[i - distance], valence, caps_differential);
                if distance == 2 {
                    boost *= 0.95;
                } else if distance == 3 {
                    boost *= 0.9;
                }
                valence += boost;
                if self.lexicon.is_negation(previous) {
                    valence *= NEGATION_SCALAR;
                }
            }

            valences.push(valence);
        }

        if let Some(but_index) = lower.iter().position(|w| w == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < but_index {
                    *valence *= 0.5;
                } else if i > but_index {
                    *valence *= 1.5;
                }
            }
        }

        valences
    }

    /// Booster contribution of `word` to a sentiment word with `valence`.
    fn booster_scalar(&self, word: &str, original: &str, valence: f64, caps_differential: bool) -> f64 {
        let Some(scalar) = self.lexicon.booster(word) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -scalar } else { scalar };
        if caps_differential && is_all_caps(original) {
            scalar += CAPS_INCREMENT.copysign(valence);
        }
        scalar
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, AnalyzerError> {
        if text.trim().is_empty() {
            return Err(AnalyzerError::EmptyText);
        }

        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(PolarityScores::NEUTRAL);
        }

        let valences = self.token_valences(&tokens);
        let emphasis = punctuation_emphasis(text);

        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = normalize(sum);

        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;
        let mut neutral_count = 0.0;
        for &v in &valences {
            if v > 0.0 {
                positive_sum += v + 1.0;
            } else if v < 0.0 {
                negative_sum += v - 1.0;
            } else {
                neutral_count += 1.0;
            }
        }
        if positive_sum > negative_sum.abs() {
            positive_sum += emphasis;
        } else if positive_sum < negative_sum.abs() {
            negative_sum -= emphasis;
        }

        let total = positive_sum + negative_sum.abs() + neutral_count;
        Ok(PolarityScores {
            positive: round_to(positive_sum / total, 3),
            neutral: round_to(neutral_count / total, 3),
            negative: round_to(negative_sum.abs() / total, 3),
            compound: round_to(compound, 4),
        })
    }
}

/// Whitespace tokens with edge punctuation removed; punctuation-only tokens dropped.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| RE_EDGE_PUNCT.replace_all(raw, "").into_owned())
        .filter(|t| t.chars().any(char::is_alphanumeric))
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are written in ALL CAPS.
fn has_caps_differential(tokens: &[String]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

/// Emphasis from up to four `!` and from repeated `?`.
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(text: &str) -> PolarityScores {
        LexiconAnalyzer::new().polarity_scores(text).unwrap()
    }

    #[test]
    fn test_opposite_polarity() {
        assert!(scores("Great news today.").compound > 0.0);
        assert!(scores("Everything failed badly.").compound < 0.0);
    }

    #[test]
    fn test_inflected_words_carry_sentiment() {
        assert!(scores("They killed the hostages.").compound < 0.0);
        assert!(scores("He loved his country.").compound > 0.0);
        assert!(scores("Our fears grew.").compound < 0.0);
        assert!(scores("The plan is failing.").compound < 0.0);
        assert!(scores("Those problems remain.").compound < 0.0);
    }

    #[test]
    fn test_single_word_compound() {
        // 3.1 / sqrt(3.1^2 + 15)
        assert!((scores("great").compound - 0.6249).abs() < 1e-4);
    }

    #[test]
    fn test_neutral_text() {
        let s = scores("The meeting is on Tuesday.");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral, 1.0);
    }

    #[test]
    fn test_proportions_sum_to_one() {
        for text in ["Great news today.", "Not bad, but not great either!", "We lost the war."] {
            let s = scores(text);
            let total = s.positive + s.neutral + s.negative;
            assert!((total - 1.0).abs() <= 0.002, "{} -> {}", text, total);
        }
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(scores("This is good.").compound > 0.0);
        assert!(scores("This is not good.").compound < 0.0);
        assert!(scores("This isn't good.").compound < 0.0);
    }

    #[test]
    fn test_booster_intensifies() {
        assert!(scores("This is very good.").compound > scores("This is good.").compound);
        assert!(scores("This is slightly good.").compound < scores("This is good.").compound);
    }

    #[test]
    fn test_caps_and_exclamation_emphasis() {
        assert!(scores("This is GREAT today").compound > scores("This is great today").compound);
        assert!(scores("This is great!!").compound > scores("This is great").compound);
    }

    #[test]
    fn test_but_shifts_weight() {
        assert!(scores("The food was good but the service was terrible.").compound < 0.0);
    }

    #[test]
    fn test_punctuation_only_is_neutral() {
        assert_eq!(scores("-----"), PolarityScores::NEUTRAL);
    }

    #[test]
    fn test_empty_text_is_an_error() {
        assert_eq!(
            LexiconAnalyzer::new().polarity_scores("   "),
            Err(AnalyzerError::EmptyText)
        );
    }

    #[test]
    fn test_custom_lexicon() {
        let analyzer = LexiconAnalyzer::with_lexicon(Lexicon::english().with_word("bullish", 2.5));
        assert!(analyzer.polarity_scores("Analysts are bullish").unwrap().compound > 0.0);
    }

    #[test]
    fn test_deterministic() {
        let analyzer = LexiconAnalyzer::new();
        let text = "Not bad, but not great either!";
        assert_eq!(analyzer.polarity_scores(text), analyzer.polarity_scores(text));
    }
}
