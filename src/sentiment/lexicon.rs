//! # Sentiment Lexicon
//!
//! Word valences on the conventional `[-4, 4]` scale, plus the booster and
//! negation word lists used by the rule-based analyzer.

use std::collections::HashMap;
use std::sync::Arc;

lazy_static::lazy_static! {
    /// Built-in English lexicon, loaded once and shared read-only.
    static ref DEFAULT_LEXICON: Arc<Lexicon> = Arc::new(Lexicon::english());
}

/// Scalar added to a sentiment word's valence by an intensifier.
pub(crate) const BOOSTER_INCREMENT: f64 = 0.293;
/// Scalar added to a sentiment word's valence by a dampener.
pub(crate) const BOOSTER_DECREMENT: f64 = -0.293;

/// Sentiment lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Word to valence mapping (lowercase keys)
    words: HashMap<String, f64>,
    /// Intensifier/dampener words and their scalar
    boosters: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// Shared instance of the built-in English lexicon.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    /// Build the built-in English lexicon.
    pub fn english() -> Self {
        let positive_words = [
            ("able", 1.3),
            ("accomplish", 1.8),
            ("achievement", 2.5),
            ("admire", 2.1),
            ("advantage", 1.0),
            ("agree", 1.5),
            ("amazing", 2.8),
            ("appreciate", 1.7),
            ("awesome", 3.1),
            ("beautiful", 2.9),
            ("benefit", 2.0),
            ("best", 3.2),
            ("better", 1.9),
            ("bless", 1.8),
            ("bright", 1.9),
            ("brilliant", 2.8),
            ("calm", 1.3),
            ("care", 2.2),
            ("celebrate", 2.7),
            ("cheer", 2.3),
            ("clean", 1.7),
            ("comfort", 1.5),
            ("confident", 2.2),
            ("courage", 2.2),
            ("delight", 2.9),
            ("dream", 1.0),
            ("eager", 1.5),
            ("encourage", 2.3),
            ("enjoy", 2.2),
            ("excellent", 2.7),
            ("excited", 1.4),
            ("exciting", 2.2),
            ("fair", 1.3),
            ("faith", 1.8),
            ("fantastic", 2.6),
            ("favor", 1.7),
            ("fine", 0.8),
            ("free", 2.3),
            ("freedom", 3.2),
            ("friend", 2.2),
            ("fun", 2.3),
            ("generous", 2.3),
            ("glad", 2.0),
            ("good", 1.9),
            ("grateful", 2.0),
            ("great", 3.1),
            ("growth", 1.6),
            ("happy", 2.7),
            ("healthy", 1.7),
            ("hope", 1.9),
            ("hopeful", 2.3),
            ("improve", 1.9),
            ("improved", 2.1),
            ("inspire", 2.7),
            ("joy", 2.8),
            ("kind", 2.4),
            ("like", 2.0),
            ("love", 3.2),
            ("lucky", 1.8),
            ("nice", 1.8),
            ("opportunity", 1.8),
            ("optimistic", 1.3),
            ("peace", 2.5),
            ("perfect", 2.7),
            ("pleasant", 2.3),
            ("pleased", 1.9),
            ("positive", 2.6),
            ("pride", 1.4),
            ("progress", 1.8),
            ("promise", 1.3),
            ("prosperity", 2.2),
            ("proud", 2.1),
            ("recover", 1.4),
            ("respect", 2.1),
            ("safe", 1.9),
            ("satisfied", 1.8),
            ("secure", 1.4),
            ("share", 1.2),
            ("smile", 1.5),
            ("strong", 2.3),
            ("strength", 2.2),
            ("success", 2.7),
            ("successful", 2.8),
            ("support", 1.7),
            ("thank", 1.5),
            ("thanks", 1.9),
            ("together", 1.2),
            ("triumph", 2.4),
            ("trust", 2.3),
            ("united", 1.8),
            ("victory", 2.8),
            ("warm", 0.9),
            ("welcome", 2.0),
            ("win", 2.8),
            ("wonderful", 2.7),
            ("yes", 1.7),
        ];

        let negative_words = [
            ("abandon", -1.9),
            ("abuse", -3.2),
            ("afraid", -2.2),
            ("anger", -2.7),
            ("angry", -2.3),
            ("anxious", -1.0),
            ("attack", -2.1),
            ("awful", -2.0),
            ("bad", -2.5),
            ("badly", -2.1),
            ("betray", -3.2),
            ("bitter", -1.8),
            ("blame", -1.4),
            ("broken", -2.1),
            ("collapse", -2.2),
            ("conflict", -1.3),
            ("crisis", -3.1),
            ("cruel", -2.8),
            ("cry", -2.1),
            ("damage", -2.2),
            ("danger", -2.4),
            ("dead", -3.3),
            ("death", -2.9),
            ("decline", -1.1),
            ("defeat", -2.0),
            ("destroy", -2.5),
            ("difficult", -1.5),
            ("disappoint", -2.3),
            ("disappointed", -1.9),
            ("disaster", -3.1),
            ("doubt", -1.5),
            ("enemy", -2.5),
            ("evil", -3.4),
            ("fail", -2.5),
            ("failed", -2.3),
            ("failure", -2.3),
            ("fear", -2.2),
            ("fight", -1.6),
            ("grief", -2.2),
            ("guilty", -1.8),
            ("harm", -2.5),
            ("hate", -2.7),
            ("hopeless", -2.0),
            ("horrible", -2.5),
            ("hostile", -2.2),
            ("hurt", -2.4),
            ("ill", -2.1),
            ("injustice", -2.7),
            ("kill", -3.7),
            ("lie", -1.6),
            ("lose", -1.6),
            ("loss", -1.3),
            ("lost", -1.3),
            ("mess", -1.5),
            ("miserable", -2.2),
            ("mistake", -1.4),
            ("negative", -2.7),
            ("no", -1.2),
            ("pain", -2.3),
            ("panic", -2.3),
            ("poor", -2.1),
            ("poverty", -2.3),
            ("problem", -1.7),
            ("reject", -1.7),
            ("risk", -1.1),
            ("sad", -2.1),
            ("scandal", -1.9),
            ("shame", -2.1),
            ("sick", -2.3),
            ("sorrow", -2.4),
            ("sorry", -0.3),
            ("struggle", -1.6),
            ("stupid", -2.4),
            ("suffer", -2.5),
            ("terrible", -2.1),
            ("terror", -3.0),
            ("threat", -2.4),
            ("tragedy", -3.4),
            ("trouble", -1.7),
            ("ugly", -2.3),
            ("unfair", -2.1),
            ("unhappy", -1.8),
            ("violence", -3.1),
            ("war", -2.9),
            ("weak", -1.9),
            ("worry", -1.9),
            ("worse", -2.1),
            ("worst", -3.1),
            ("wrong", -2.1),
        ];

        let words = positive_words
            .iter()
            .chain(negative_words.iter())
            .map(|(w, v)| (w.to_string(), *v))
            .collect();

        let boosters = [
            ("absolutely", BOOSTER_INCREMENT),
            ("amazingly", BOOSTER_INCREMENT),
            ("completely", BOOSTER_INCREMENT),
            ("deeply", BOOSTER_INCREMENT),
            ("enormously", BOOSTER_INCREMENT),
            ("entirely", BOOSTER_INCREMENT),
            ("especially", BOOSTER_INCREMENT),
            ("exceptionally", BOOSTER_INCREMENT),
            ("extremely", BOOSTER_INCREMENT),
            ("greatly", BOOSTER_INCREMENT),
            ("highly", BOOSTER_INCREMENT),
            ("hugely", BOOSTER_INCREMENT),
            ("incredibly", BOOSTER_INCREMENT),
            ("most", BOOSTER_INCREMENT),
            ("particularly", BOOSTER_INCREMENT),
            ("quite", BOOSTER_INCREMENT),
            ("really", BOOSTER_INCREMENT),
            ("remarkably", BOOSTER_INCREMENT),
            ("so", BOOSTER_INCREMENT),
            ("substantially", BOOSTER_INCREMENT),
            ("totally", BOOSTER_INCREMENT),
            ("tremendously", BOOSTER_INCREMENT),
            ("truly", BOOSTER_INCREMENT),
            ("very", BOOSTER_INCREMENT),
            ("almost", BOOSTER_DECREMENT),
            ("barely", BOOSTER_DECREMENT),
            ("hardly", BOOSTER_DECREMENT),
            ("less", BOOSTER_DECREMENT),
            ("little", BOOSTER_DECREMENT),
            ("marginally", BOOSTER_DECREMENT),
            ("occasionally", BOOSTER_DECREMENT),
            ("partly", BOOSTER_DECREMENT),
            ("scarcely", BOOSTER_DECREMENT),
            ("slightly", BOOSTER_DECREMENT),
            ("somewhat", BOOSTER_DECREMENT),
        ]
        .iter()
        .map(|(w, v)| (w.to_string(), *v))
        .collect();

        let negations = [
            "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
            "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "none",
            "nope", "nor", "not", "nothing", "nowhere", "shouldnt", "wasnt", "werent", "without",
            "wont", "wouldnt",
        ]
        .iter()
        .map(|w| w.to_string())
        .collect();

        Self {
            words,
            boosters,
            negations,
        }
    }

    /// Add or override a word's valence.
    pub fn with_word(mut self, word: &str, valence: f64) -> Self {
        self.words.insert(word.to_lowercase(), valence);
        self
    }

    /// Number of sentiment-bearing words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no sentiment-bearing words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Valence of a lowercase word.
    ///
    /// Inflected forms without their own entry ("loved", "fears", "failing")
    /// fall back to the valence of their base form.
    pub fn valence(&self, word: &str) -> Option<f64> {
        if let Some(v) = self.words.get(word) {
            return Some(*v);
        }
        base_forms(word)
            .into_iter()
            .find_map(|base| self.words.get(&base).copied())
    }

    /// Booster scalar of a lowercase word.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// Whether a lowercase word negates what follows.
    ///
    /// Apostrophes are ignored, and any `n't` contraction counts.
    pub fn is_negation(&self, word: &str) -> bool {
        if word.contains("n't") {
            return true;
        }
        let bare: String = word.chars().filter(|c| *c != '\'' && *c != '’').collect();
        self.negations.iter().any(|n| *n == bare)
    }
}

/// Shortest stem considered when stripping a suffix.
const MIN_STEM_CHARS: usize = 3;

/// Candidate base forms of a regular English inflection, most likely first.
fn base_forms(word: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut push_stem = |stem: &str, restore_e: bool| {
        if stem.chars().count() < MIN_STEM_CHARS {
            return;
        }
        candidates.push(stem.to_string());
        if restore_e {
            candidates.push(format!("{}e", stem));
        }
        // "stopped" -> "stop", "winning" -> "win"
        let mut chars = stem.chars().rev();
        if let (Some(last), Some(prev)) = (chars.next(), chars.next()) {
            if last == prev && !matches!(last, 'l' | 's' | 'z') {
                candidates.push(stem[..stem.len() - last.len_utf8()].to_string());
            }
        }
    };

    if let Some(stem) = word.strip_suffix("ies") {
        candidates.push(format!("{}y", stem));
    } else if let Some(stem) = word.strip_suffix("ied") {
        candidates.push(format!("{}y", stem));
    } else if let Some(stem) = word.strip_suffix("ing") {
        push_stem(stem, true);
    } else if let Some(stem) = word.strip_suffix("ed") {
        push_stem(stem, true);
    } else if let Some(stem) = word.strip_suffix("es") {
        push_stem(stem, true);
    } else if let Some(stem) = word.strip_suffix('s') {
        if !stem.ends_with('s') {
            push_stem(stem, false);
        }
    }
    candidates
}
