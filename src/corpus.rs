//! Static demo corpus: papers, citation edges, keyword concepts and the
//! named result sets a query can resolve to.
//!
//! Everything here is compiled in. Lookups never fail; unknown ids are
//! dropped and unknown queries fall back to the seed result set.

use crate::models::Paper;
use tracing::debug;

// ============================================================================
// Seed
// ============================================================================

pub const SEED_TITLE: &str =
    "Beyond Accuracy: The Role of Mental Models in Human-AI Team Performance";

/// Edge-set key whose targets are the seed paper's citations.
pub const SEED_EDGE_KEY: &str = "seed";

// ============================================================================
// Papers
// ============================================================================

pub static PAPERS: &[Paper] = &[
    // Core eight: the seed result set
    Paper {
        id: "norman_1983",
        title: "Mental Models of Intelligent Systems",
        authors: "D. Norman",
        year: 1983,
        venue: "Human–Computer Interaction",
        relevance: 0.95,
        keywords: &["mental models", "human understanding", "cognition"],
        snippet: "Introduces mental models as internal representations humans use to understand and predict system behavior.",
        abstract_text: "Classic work describing how people build internal representations of systems to predict outcomes and explain behavior.",
    },
    Paper {
        id: "ribeiro_2016_lime",
        title: "Why Should I Trust You? Explaining the Predictions of Any Classifier",
        authors: "M. Ribeiro, S. Singh, C. Guestrin",
        year: 2016,
        venue: "KDD",
        relevance: 0.92,
        keywords: &["explainable AI", "interpretability", "trust"],
        snippet: "Presents LIME, a method for explaining individual predictions to improve human trust and understanding.",
        abstract_text: "Introduces LIME, a local surrogate explanation method that helps users interpret model predictions and debug behavior.",
    },
    Paper {
        id: "kaur_2020_trust",
        title: "On the Relationship Between Explanation and Trust in AI Systems",
        authors: "S. Kaur et al.",
        year: 2020,
        venue: "CHI",
        relevance: 0.90,
        keywords: &["trust", "explainability", "human-AI interaction"],
        snippet: "Shows explanations influence trust calibration rather than blind reliance.",
        abstract_text: "Examines how explanation interfaces affect user trust, calibration, and reliance behaviors in AI-assisted tasks.",
    },
    Paper {
        id: "amershi_2019_collab",
        title: "Human-AI Collaboration: Models, Design Patterns, and Future Directions",
        authors: "S. Amershi et al.",
        year: 2019,
        venue: "CHI",
        relevance: 0.93,
        keywords: &["human-AI teaming", "collaboration", "design patterns"],
        snippet: "Framework for designing effective human-AI collaborative systems beyond raw accuracy.",
        abstract_text: "Synthesizes models and design patterns for human–AI collaboration, emphasizing workflows and feedback loops.",
    },
    Paper {
        id: "lipton_2018_mythos",
        title: "The Mythos of Model Interpretability",
        authors: "Z. Lipton",
        year: 2018,
        venue: "Queue",
        relevance: 0.85,
        keywords: &["interpretability", "mental models", "machine learning"],
        snippet: "Critically examines what interpretability means and how it affects user understanding.",
        abstract_text: "Critiques ambiguous definitions of interpretability and argues for clearer goals and evaluation in context.",
    },
    Paper {
        id: "bansal_2021_error",
        title: "Predictability and Transparency in AI Error Behavior",
        authors: "H. Bansal, E. Weld",
        year: 2021,
        venue: "AAAI",
        relevance: 0.88,
        keywords: &["error boundaries", "predictability", "human-AI teaming"],
        snippet: "Predictable error patterns can improve human-AI team performance more than higher accuracy.",
        abstract_text: "Explores how predictable vs. unpredictable errors shape user mental models, reliance, and collaboration outcomes.",
    },
    Paper {
        id: "lee_see_2004_trust",
        title: "Appropriate Trust and Reliance in Human-AI Teams",
        authors: "J. Lee, K. See",
        year: 2004,
        venue: "Human Factors",
        relevance: 0.87,
        keywords: &["trust", "calibration", "automation"],
        snippet: "Classic paper on trust calibration and appropriate reliance on automated systems.",
        abstract_text: "Foundational work on trust in automation and how design supports appropriate reliance, avoiding misuse/disuse.",
    },
    Paper {
        id: "shneiderman_2020_control",
        title: "Designing AI Systems for Effective Human Control",
        authors: "B. Shneiderman",
        year: 2020,
        venue: "Communications of the ACM",
        relevance: 0.84,
        keywords: &["human-centered AI", "control", "explainability"],
        snippet: "Human-centered design principles to maintain user control and understanding.",
        abstract_text: "Argues for human-centered AI emphasizing oversight, responsibility, and transparency in socio-technical systems.",
    },
    // Interpretability, trust and teaming follow-ups
    Paper {
        id: "doshi_velez_2017",
        title: "Towards a Rigorous Science of Interpretable Machine Learning",
        authors: "F. Doshi-Velez, B. Kim",
        year: 2017,
        venue: "(Demo) arXiv",
        relevance: 0.82,
        keywords: &["interpretability", "evaluation", "machine learning"],
        snippet: "Argues for clearer goals and evaluation methods for interpretability.",
        abstract_text: "Proposes a framework for evaluating interpretability depending on task, user population, and stakes.",
    },
    Paper {
        id: "miller_2019_explanations",
        title: "Explanation in Artificial Intelligence: Insights from the Social Sciences",
        authors: "T. Miller",
        year: 2019,
        venue: "AI Journal",
        relevance: 0.83,
        keywords: &["explainability", "human understanding", "trust"],
        snippet: "Connects explanation needs to how humans understand and accept reasoning.",
        abstract_text: "Synthesizes social science research on explanation and maps implications to AI system design.",
    },
    Paper {
        id: "zhang_2020_calibration",
        title: "Calibrating Trust in AI-Assisted Decision Making",
        authors: "Y. Zhang et al.",
        year: 2020,
        venue: "(Demo) CSCW",
        relevance: 0.78,
        keywords: &["trust", "calibration", "human-AI interaction"],
        snippet: "Examines interventions to reduce over/under-reliance on AI.",
        abstract_text: "Studies calibration strategies such as confidence cues, history, and explanations and their effects on reliance.",
    },
    Paper {
        id: "wu_2021_error_boundary",
        title: "Characterizing Error Boundaries for Human-AI Collaboration",
        authors: "J. Wu et al.",
        year: 2021,
        venue: "(Demo) AAAI",
        relevance: 0.81,
        keywords: &["error boundaries", "human-AI teaming", "predictability"],
        snippet: "Ways to summarize failure regions so users can learn when to rely on AI.",
        abstract_text: "Explores representations of error boundaries and how they influence user mental models and reliance behavior.",
    },
    Paper {
        id: "khanna_2022_feedback",
        title: "Designing Feedback Loops for Human-AI Teaming",
        authors: "S. Khanna et al.",
        year: 2022,
        venue: "(Demo) CHI",
        relevance: 0.77,
        keywords: &["human-AI teaming", "collaboration", "design patterns"],
        snippet: "Design patterns for feedback loops in human-AI systems.",
        abstract_text: "Discusses feedback loop designs that help humans and AI coordinate, correct errors, and refine strategies.",
    },
    Paper {
        id: "yang_2023_transparency",
        title: "Transparency Interfaces for Predictable Reliance",
        authors: "K. Yang et al.",
        year: 2023,
        venue: "(Demo) UIST",
        relevance: 0.75,
        keywords: &["transparency", "trust", "predictability"],
        snippet: "UI patterns for communicating limitations and supporting calibrated reliance.",
        abstract_text: "Explores interface patterns that communicate uncertainty and limitations so users can form reliable mental models.",
    },
    // Mental models and cognition
    Paper {
        id: "johnson_laird_1983",
        title: "Mental Models: Towards a Cognitive Science of Language, Inference, and Consciousness",
        authors: "P. Johnson-Laird",
        year: 1983,
        venue: "Book (Demo)",
        relevance: 0.80,
        keywords: &["mental models", "cognition", "reasoning"],
        snippet: "Foundational theory describing mental models as the basis for human reasoning and inference.",
        abstract_text: "Proposes that people reason by constructing and manipulating mental models of situations rather than relying on formal logic alone.",
    },
    Paper {
        id: "gentner_structure_mapping_1983",
        title: "Structure-Mapping: A Theoretical Framework for Analogy",
        authors: "D. Gentner",
        year: 1983,
        venue: "Cognitive Science (Demo)",
        relevance: 0.74,
        keywords: &["cognition", "human understanding", "analogy"],
        snippet: "Explains how people transfer knowledge via analogical mapping, supporting mental model formation.",
        abstract_text: "Introduces structure-mapping theory of analogy, explaining how relational structure guides human understanding and learning.",
    },
    Paper {
        id: "hutchins_cognition_1995",
        title: "Cognition in the Wild: Distributed Cognition and Real-World Work",
        authors: "E. Hutchins",
        year: 1995,
        venue: "Book (Demo)",
        relevance: 0.72,
        keywords: &["human understanding", "cognition", "distributed cognition"],
        snippet: "Shows cognition is distributed across people and artifacts, relevant to team mental models.",
        abstract_text: "Argues that cognition is not confined to individuals but distributed across social and material systems, shaping performance in complex tasks.",
    },
    Paper {
        id: "klein_sensemaking_1998",
        title: "A Data-Frame Theory of Sensemaking",
        authors: "G. Klein et al.",
        year: 1998,
        venue: "IEEE Intelligent Systems (Demo)",
        relevance: 0.70,
        keywords: &["sensemaking", "human understanding", "cognition"],
        snippet: "Sensemaking theory relevant to how people build and revise mental models.",
        abstract_text: "Describes how people adopt frames to interpret data and revise frames when anomalies arise, explaining how mental models evolve over time.",
    },
    Paper {
        id: "endsley_sa_1995",
        title: "Toward a Theory of Situation Awareness in Dynamic Systems",
        authors: "M. Endsley",
        year: 1995,
        venue: "Human Factors (Demo)",
        relevance: 0.76,
        keywords: &["human understanding", "situation awareness", "cognition"],
        snippet: "Defines situation awareness and its relationship to decision making in dynamic environments.",
        abstract_text: "Proposes a theory of situation awareness as perception, comprehension, and projection, and connects it to performance and decision quality.",
    },
    // Trust, reliance and automation
    Paper {
        id: "parasuraman_2000",
        title: "A Model for Types and Levels of Human Interaction with Automation",
        authors: "R. Parasuraman, T. Sheridan, C. Wickens",
        year: 2000,
        venue: "IEEE Transactions (Demo)",
        relevance: 0.79,
        keywords: &["automation", "trust", "human-AI interaction"],
        snippet: "Framework for levels of automation and how they affect monitoring and reliance.",
        abstract_text: "Presents a taxonomy of automation levels and discusses how design choices shape human monitoring, workload, and appropriate reliance.",
    },
    Paper {
        id: "hoff_rashid_trust_2016",
        title: "Trust in Automation: Integrating Empirical Evidence Across Domains",
        authors: "K. Hoff, A. Bashir",
        year: 2016,
        venue: "Human Factors (Demo)",
        relevance: 0.73,
        keywords: &["trust", "calibration", "automation"],
        snippet: "Synthesizes factors influencing trust calibration including transparency and experience.",
        abstract_text: "Reviews empirical findings on trust in automation, identifying drivers of trust, misuse/disuse, and strategies to improve calibration.",
    },
    Paper {
        id: "calibrated_confidence_2019",
        title: "Communicating Model Confidence for Calibrated Reliance",
        authors: "A. Park et al.",
        year: 2019,
        venue: "(Demo) CHI",
        relevance: 0.69,
        keywords: &["trust", "calibration", "transparency"],
        snippet: "Studies UI confidence cues and their effect on over/under-reliance.",
        abstract_text: "Examines how confidence displays and performance histories influence reliance, including cases where confidence can mislead when poorly calibrated.",
    },
    // Explanation evaluation and documentation
    Paper {
        id: "xai_user_eval_2018",
        title: "Human-Centered Evaluation of Explanations: Tasks, Measures, and Pitfalls",
        authors: "V. Lai et al.",
        year: 2018,
        venue: "(Demo) CHI",
        relevance: 0.71,
        keywords: &["explainable AI", "evaluation", "human-AI interaction"],
        snippet: "Compares explanation styles and measures effects on understanding and decision quality.",
        abstract_text: "Presents a set of evaluation approaches for explanation interfaces and discusses pitfalls where explanations increase confidence without improving correctness.",
    },
    Paper {
        id: "model_cards_2019",
        title: "Model Cards for Model Reporting",
        authors: "M. Mitchell et al.",
        year: 2019,
        venue: "FAT* (Demo)",
        relevance: 0.67,
        keywords: &["transparency", "documentation", "human-centered AI"],
        snippet: "Documentation approach to communicate intended use, limitations, and evaluation.",
        abstract_text: "Proposes standardized documentation for models to support informed use, communicating evaluation context, performance, and limitations.",
    },
    // Error boundaries and predictability
    Paper {
        id: "failure_modes_2020",
        title: "Summarizing Model Failure Modes for Non-Expert Users",
        authors: "J. Rivera et al.",
        year: 2020,
        venue: "(Demo) UIST",
        relevance: 0.72,
        keywords: &["error boundaries", "predictability", "human understanding"],
        snippet: "Techniques to show users where a model tends to fail, supporting better mental models.",
        abstract_text: "Explores ways to summarize failure regions and communicate them to users so they can anticipate errors and allocate attention effectively.",
    },
    Paper {
        id: "selective_prediction_2017",
        title: "Selective Prediction: Abstention Mechanisms for Safer Human-AI Collaboration",
        authors: "S. Gupta et al.",
        year: 2017,
        venue: "(Demo) ICML",
        relevance: 0.68,
        keywords: &["predictability", "human-AI teaming", "trust"],
        snippet: "Abstention to avoid low-confidence errors, intended to improve collaboration safety.",
        abstract_text: "Introduces abstention/deferral strategies that can reduce catastrophic errors, and discusses implications for user reliance and workflow design.",
    },
];

// ============================================================================
// Citation Edges
// ============================================================================

const SEED_PAPER_IDS: &[&str] = &[
    "norman_1983",
    "ribeiro_2016_lime",
    "kaur_2020_trust",
    "amershi_2019_collab",
    "lipton_2018_mythos",
    "bansal_2021_error",
    "lee_see_2004_trust",
    "shneiderman_2020_control",
];

/// Directed "cites" edges. Not a tree: khanna <-> amershi is a cycle and
/// miller reaches back into the trust cluster.
pub static CITES: &[(&str, &[&str])] = &[
    (SEED_EDGE_KEY, SEED_PAPER_IDS),
    (
        "norman_1983",
        &[
            "johnson_laird_1983",
            "gentner_structure_mapping_1983",
            "endsley_sa_1995",
            "klein_sensemaking_1998",
            "hutchins_cognition_1995",
        ],
    ),
    (
        "ribeiro_2016_lime",
        &["doshi_velez_2017", "miller_2019_explanations", "xai_user_eval_2018"],
    ),
    ("lipton_2018_mythos", &["doshi_velez_2017", "miller_2019_explanations"]),
    ("doshi_velez_2017", &["xai_user_eval_2018", "model_cards_2019"]),
    ("xai_user_eval_2018", &["model_cards_2019"]),
    ("model_cards_2019", &[]),
    (
        "kaur_2020_trust",
        &["zhang_2020_calibration", "miller_2019_explanations", "calibrated_confidence_2019"],
    ),
    ("lee_see_2004_trust", &["parasuraman_2000", "hoff_rashid_trust_2016"]),
    ("zhang_2020_calibration", &["hoff_rashid_trust_2016", "calibrated_confidence_2019"]),
    ("parasuraman_2000", &["hoff_rashid_trust_2016"]),
    ("hoff_rashid_trust_2016", &["calibrated_confidence_2019"]),
    ("calibrated_confidence_2019", &[]),
    (
        "amershi_2019_collab",
        &["khanna_2022_feedback", "shneiderman_2020_control", "parasuraman_2000"],
    ),
    ("khanna_2022_feedback", &["amershi_2019_collab"]),
    (
        "bansal_2021_error",
        &[
            "wu_2021_error_boundary",
            "failure_modes_2020",
            "selective_prediction_2017",
            "yang_2023_transparency",
        ],
    ),
    ("wu_2021_error_boundary", &["failure_modes_2020", "selective_prediction_2017"]),
    ("failure_modes_2020", &["selective_prediction_2017"]),
    ("selective_prediction_2017", &[]),
    ("shneiderman_2020_control", &["model_cards_2019", "yang_2023_transparency"]),
    ("yang_2023_transparency", &["calibrated_confidence_2019", "model_cards_2019"]),
    ("johnson_laird_1983", &[]),
    ("gentner_structure_mapping_1983", &[]),
    ("hutchins_cognition_1995", &[]),
    ("klein_sensemaking_1998", &[]),
    ("endsley_sa_1995", &[]),
    ("miller_2019_explanations", &["johnson_laird_1983", "lee_see_2004_trust"]),
];

// ============================================================================
// Keyword Concepts
// ============================================================================

pub const CONCEPT_MENTAL_MODELS: &str = "Mental Models & Interpretability";
pub const CONCEPT_EXPLAINABILITY: &str = "Explainability & Transparency";
pub const CONCEPT_COLLABORATION: &str = "Human–AI Collaboration";
pub const CONCEPT_TRUST: &str = "Trust, Calibration & Reliance";
pub const CONCEPT_ERRORS: &str = "Error Predictability";

pub static CANONICAL_KEYWORDS: &[(&str, &str)] = &[
    ("mental models", CONCEPT_MENTAL_MODELS),
    ("human understanding", CONCEPT_MENTAL_MODELS),
    ("cognition", CONCEPT_MENTAL_MODELS),
    ("sensemaking", CONCEPT_MENTAL_MODELS),
    ("situation awareness", CONCEPT_MENTAL_MODELS),
    ("distributed cognition", CONCEPT_MENTAL_MODELS),
    ("reasoning", CONCEPT_MENTAL_MODELS),
    ("analogy", CONCEPT_MENTAL_MODELS),
    ("explainable AI", CONCEPT_EXPLAINABILITY),
    ("explainability", CONCEPT_EXPLAINABILITY),
    ("transparency", CONCEPT_EXPLAINABILITY),
    ("documentation", CONCEPT_EXPLAINABILITY),
    ("evaluation", CONCEPT_EXPLAINABILITY),
    ("interpretability", CONCEPT_EXPLAINABILITY),
    ("human-AI teaming", CONCEPT_COLLABORATION),
    ("human-AI interaction", CONCEPT_COLLABORATION),
    ("collaboration", CONCEPT_COLLABORATION),
    ("design patterns", CONCEPT_COLLABORATION),
    ("human-centered AI", CONCEPT_COLLABORATION),
    ("control", CONCEPT_COLLABORATION),
    ("trust", CONCEPT_TRUST),
    ("calibration", CONCEPT_TRUST),
    ("automation", CONCEPT_TRUST),
    ("error boundaries", CONCEPT_ERRORS),
    ("predictability", CONCEPT_ERRORS),
];

/// Map a raw keyword to its concept label. Unmapped keywords come back
/// trimmed but otherwise unchanged.
pub fn canonicalize_keyword(keyword: &str) -> &str {
    let keyword = keyword.trim();
    match CANONICAL_KEYWORDS.iter().find(|(raw, _)| *raw == keyword) {
        Some((_, concept)) => *concept,
        None => keyword,
    }
}

// ============================================================================
// Lookups
// ============================================================================

pub fn find_paper(id: &str) -> Option<&'static Paper> {
    PAPERS.iter().find(|p| p.id == id)
}

/// Resolve a list of ids against the paper table, skipping unknown ids.
pub fn resolve_papers(ids: &[&str]) -> Vec<&'static Paper> {
    ids.iter().filter_map(|id| find_paper(id)).collect()
}

/// Papers cited by `id`, in edge-list order. Missing keys and dangling
/// targets yield an empty or shorter list, never an error.
pub fn cited_papers(id: &str) -> Vec<&'static Paper> {
    CITES
        .iter()
        .find(|(source, _)| *source == id)
        .map(|(_, targets)| resolve_papers(targets))
        .unwrap_or_default()
}

// ============================================================================
// Result Sets
// ============================================================================

/// Registry of the precomputed result sets a search can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSet {
    MentalModelsSeed,
}

impl ResultSet {
    pub const ALL: &'static [ResultSet] = &[ResultSet::MentalModelsSeed];

    /// Where unrecognized queries end up.
    pub const DEFAULT: ResultSet = ResultSet::MentalModelsSeed;

    /// The query string that selects this set.
    pub fn query_key(&self) -> &'static str {
        match self {
            ResultSet::MentalModelsSeed => SEED_TITLE,
        }
    }

    pub fn paper_ids(&self) -> &'static [&'static str] {
        match self {
            ResultSet::MentalModelsSeed => SEED_PAPER_IDS,
        }
    }

    pub fn papers(&self) -> Vec<&'static Paper> {
        resolve_papers(self.paper_ids())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMatch {
    Exact(ResultSet),
    Fallback(ResultSet),
}

impl QueryMatch {
    pub fn result_set(&self) -> ResultSet {
        match self {
            QueryMatch::Exact(set) | QueryMatch::Fallback(set) => *set,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, QueryMatch::Exact(_))
    }
}

/// Dictionary lookup of a free-text query with a fallback to the seed set.
/// Surrounding whitespace is ignored; nothing else is normalized.
pub fn lookup_results(query: &str) -> QueryMatch {
    let query = query.trim();
    match ResultSet::ALL.iter().find(|set| set.query_key() == query) {
        Some(set) => QueryMatch::Exact(*set),
        None => {
            debug!(query, "unrecognized query, using default result set");
            QueryMatch::Fallback(ResultSet::DEFAULT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paper_ids_are_unique() {
        let ids: HashSet<_> = PAPERS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PAPERS.len());
        assert_eq!(PAPERS.len(), 26);
    }

    #[test]
    fn every_edge_resolves() {
        for (source, targets) in CITES {
            if *source != SEED_EDGE_KEY {
                assert!(find_paper(source).is_some(), "unknown source {}", source);
            }
            for target in *targets {
                assert!(find_paper(target).is_some(), "unknown target {}", target);
            }
        }
    }

    #[test]
    fn default_result_set_has_eight_known_papers() {
        let papers = ResultSet::DEFAULT.papers();
        assert_eq!(papers.len(), 8);
        assert_eq!(papers.len(), ResultSet::DEFAULT.paper_ids().len());
        assert_eq!(papers[0].id, "norman_1983");
    }

    #[test]
    fn seed_edges_match_default_result_set() {
        let seed: Vec<_> = cited_papers(SEED_EDGE_KEY).iter().map(|p| p.id).collect();
        assert_eq!(seed, ResultSet::DEFAULT.paper_ids());
    }

    #[test]
    fn seed_title_matches_exactly() {
        assert_eq!(lookup_results(SEED_TITLE), QueryMatch::Exact(ResultSet::MentalModelsSeed));
        assert!(lookup_results(&format!("  {}  ", SEED_TITLE)).is_exact());
    }

    #[test]
    fn unrecognized_query_falls_back_to_default() {
        let m = lookup_results("random unseen text");
        assert!(!m.is_exact());
        assert_eq!(m.result_set(), lookup_results(SEED_TITLE).result_set());
        assert_eq!(lookup_results("").result_set(), ResultSet::DEFAULT);
        // Case is not folded
        assert!(!lookup_results(&SEED_TITLE.to_lowercase()).is_exact());
    }

    #[test]
    fn leaf_paper_cites_nothing() {
        assert!(cited_papers("model_cards_2019").is_empty());
        assert!(cited_papers("johnson_laird_1983").is_empty());
    }

    #[test]
    fn unknown_paper_cites_nothing() {
        assert!(cited_papers("no_such_paper").is_empty());
    }

    #[test]
    fn citations_keep_edge_order() {
        let ids: Vec<_> = cited_papers("miller_2019_explanations").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["johnson_laird_1983", "lee_see_2004_trust"]);
    }

    #[test]
    fn resolve_skips_unknown_ids() {
        let papers = resolve_papers(&["norman_1983", "ghost", "model_cards_2019"]);
        let ids: Vec<_> = papers.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["norman_1983", "model_cards_2019"]);
    }

    #[test]
    fn canonicalize_maps_and_passes_through() {
        assert_eq!(canonicalize_keyword("trust"), CONCEPT_TRUST);
        assert_eq!(canonicalize_keyword("  cognition "), CONCEPT_MENTAL_MODELS);
        assert_eq!(canonicalize_keyword("machine learning"), "machine learning");
        assert_eq!(canonicalize_keyword(" machine learning "), "machine learning");
    }
}
