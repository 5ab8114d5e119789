// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use serde::Serialize;
use tracing::debug;

// Layer 3: Internal module imports
use crate::concept::relation::RelationKind;
use crate::error::GraphError;
use crate::graph::knowledge::KnowledgeGraph;

/// Tokens this many positions apart (or closer) within a sentence get an
/// association edge.
pub const COOCCURRENCE_WINDOW: usize = 5;

/// Content words must be at least this long.
pub const MIN_TOKEN_LEN: usize = 3;

/// Weight given to relations extracted from an explicit sentence pattern.
const PATTERN_WEIGHT: f64 = 0.9;

/// Function words that carry no conceptual content of their own. Short
/// words fall to the length filter; this list catches the longer ones.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "his", "was",
    "one", "our", "out", "has", "have", "been", "were", "from", "they", "them", "this", "that",
    "with", "will", "would", "there", "their", "what", "when", "which", "into", "than", "then",
    "some", "very", "also", "such", "only", "over", "under", "about", "after", "before", "because",
];

/// What an ingest run did to the graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    /// Words seen, including function words.
    pub tokens: usize,
    /// Content words created or re-activated.
    pub concepts_touched: usize,
    /// Relation upserts issued (co-occurrence and patterns).
    pub relations_added: usize,
}

/// Turns raw text into concepts and relations through the facade.
///
/// Splits text into sentences, normalizes words, then does three things
/// per sentence: activate a concept per content word, associate content
/// words co-occurring within a short window (closer pairs get heavier
/// edges), and extract a few explicit patterns ("x is a y", "x causes y",
/// "x part of y") into typed relations.
pub struct TextIngestor<'a> {
    graph: &'a KnowledgeGraph,
}

impl<'a> TextIngestor<'a> {
    /// Create an ingestor over a graph.
    pub fn new(graph: &'a KnowledgeGraph) -> Self {
        Self { graph }
    }

    /// Ingest one document.
    ///
    /// # Errors
    ///
    /// [`GraphError::Runtime`] when concept creation fails (engine
    /// shutdown, actor limit). Sends past creation are best-effort.
    pub async fn ingest(&self, text: &str) -> Result<IngestReport, GraphError> {
        let mut report = IngestReport::default();

        for sentence in text.split(['.', '!', '?']) {
            let words: Vec<String> = sentence
                .split_whitespace()
                .map(normalize)
                .filter(|w| !w.is_empty())
                .collect();
            if words.is_empty() {
                continue;
            }
            report.tokens += words.len();

            self.extract_patterns(&words, &mut report).await?;

            // Content words become activated concepts.
            let mut ids = Vec::with_capacity(words.len());
            for word in words.iter().filter(|w| is_content_word(w)) {
                let id = self.graph.create_concept(word).await?;
                self.graph.activate_concept(id).await;
                ids.push(id);
            }
            report.concepts_touched += ids.len();

            // Symmetric association between window neighbours; adjacent
            // words bind at full weight, the edge thins with distance.
            for i in 0..ids.len() {
                let upper = (i + COOCCURRENCE_WINDOW).min(ids.len() - 1);
                for j in (i + 1)..=upper {
                    if ids[i] == ids[j] {
                        continue;
                    }
                    let weight = 1.0 / (j - i) as f64;
                    self.graph
                        .add_relation(ids[i], ids[j], RelationKind::AssociatedWith, weight)
                        .await;
                    self.graph
                        .add_relation(ids[j], ids[i], RelationKind::AssociatedWith, weight)
                        .await;
                    report.relations_added += 2;
                }
            }
        }

        debug!(
            tokens = report.tokens,
            concepts = report.concepts_touched,
            relations = report.relations_added,
            "ingested document"
        );
        Ok(report)
    }

    /// Scan a normalized sentence for the few patterns we type explicitly.
    async fn extract_patterns(
        &self,
        words: &[String],
        report: &mut IngestReport,
    ) -> Result<(), GraphError> {
        for i in 0..words.len() {
            // "<x> is a <y>" / "<x> is an <y>"
            if i + 2 < words.len()
                && words[i + 1] == "is"
                && (words[i + 2] == "a" || words[i + 2] == "an")
            {
                if let Some(object) = words.get(i + 3) {
                    self.typed_relation(&words[i], object, RelationKind::IsA, report)
                        .await?;
                }
            }

            // "<x> causes <y>"
            if words[i] == "causes" && i > 0 {
                if let (Some(subject), Some(object)) = (words.get(i - 1), words.get(i + 1)) {
                    self.typed_relation(subject, object, RelationKind::Causes, report)
                        .await?;
                }
            }

            // "<x> part of <y>"
            if words[i] == "part" && words.get(i + 1).map(String::as_str) == Some("of") && i > 0 {
                if let (Some(subject), Some(object)) = (words.get(i - 1), words.get(i + 2)) {
                    self.typed_relation(subject, object, RelationKind::PartOf, report)
                        .await?;
                }
            }
        }
        Ok(())
    }

    /// Create both endpoints and lay a typed edge between them.
    async fn typed_relation(
        &self,
        subject: &str,
        object: &str,
        kind: RelationKind,
        report: &mut IngestReport,
    ) -> Result<(), GraphError> {
        if !is_content_word(subject) || !is_content_word(object) || subject == object {
            return Ok(());
        }
        let subject_id = self.graph.create_concept(subject).await?;
        let object_id = self.graph.create_concept(object).await?;
        self.graph
            .add_relation(subject_id, object_id, kind, PATTERN_WEIGHT)
            .await;
        report.relations_added += 1;
        Ok(())
    }
}

/// Lowercase and strip everything that is not alphanumeric.
fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Long enough and not a function word.
fn is_content_word(word: &str) -> bool {
    word.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(&word)
}
