use serde::Serialize;
use serde_json::Value;

use super::CollaboratorError;

/// Maps a member's skills to suggestions.
///
/// The returned value is opaque to the router and is serialized to the client as is.
pub trait Recommender: Send + Sync {
    fn recommend(&self, skills: &[String]) -> Result<Value, CollaboratorError>;
}

const CATALOG: &[(&str, &[&str])] = &[
    ("python", &["data analysis", "machine learning", "django"]),
    ("javascript", &["react", "node.js", "web design"]),
    ("web design", &["ui design", "javascript", "photography"]),
    ("guitar", &["music theory", "singing", "piano"]),
    ("piano", &["music theory", "guitar"]),
    ("singing", &["music theory", "public speaking"]),
    ("cooking", &["baking", "nutrition", "photography"]),
    ("baking", &["cooking", "cake decorating"]),
    ("photography", &["video editing", "graphic design"]),
    ("graphic design", &["ui design", "illustration", "photography"]),
    ("spanish", &["french", "public speaking"]),
    ("french", &["spanish", "italian"]),
    ("public speaking", &["writing", "leadership"]),
    ("writing", &["editing", "public speaking"]),
    ("yoga", &["meditation", "nutrition"]),
];

const STARTER_SKILLS: &[&str] = &["python", "public speaking", "cooking", "guitar", "photography"];

#[derive(Serialize)]
struct Recommendations<'a> {
    skills: &'a [String],
    recommendations: Vec<&'static str>,
}

/// Suggests neighbours of known skills from a fixed catalog.
///
/// Lookups are case-insensitive and trimmed. Skills the member already has are never suggested.
/// Without any input the popular starter skills are returned.
#[derive(Default, Clone, Copy, Debug)]
pub struct CatalogRecommender;

impl CatalogRecommender {
    fn related(skill: &str) -> &'static [&'static str] {
        CATALOG
            .iter()
            .find(|(name, _)| *name == skill)
            .map(|(_, related)| *related)
            .unwrap_or(&[])
    }
}

impl Recommender for CatalogRecommender {
    fn recommend(&self, skills: &[String]) -> Result<Value, CollaboratorError> {
        let known: Vec<String> = skills
            .iter()
            .map(|skill| skill.trim().to_lowercase())
            .collect();

        let candidates: Vec<&'static str> = if known.is_empty() {
            STARTER_SKILLS.to_vec()
        } else {
            known
                .iter()
                .flat_map(|skill| Self::related(skill).iter().copied())
                .collect()
        };

        let mut recommendations = Vec::new();
        for candidate in candidates {
            let held = known.iter().any(|skill| skill == candidate);

            if !held && !recommendations.contains(&candidate) {
                recommendations.push(candidate);
            }
        }

        Ok(serde_json::to_value(Recommendations {
            skills,
            recommendations,
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        let result = CatalogRecommender.recommend(&[]).unwrap();
        assert_eq!(result["skills"], serde_json::json!([]));
        assert_eq!(result["recommendations"], serde_json::json!(STARTER_SKILLS));
    }

    #[test]
    fn test_related_skills() {
        let result = CatalogRecommender
            .recommend(&skills(&[" Python ", "guitar"]))
            .unwrap();

        assert_eq!(
            result["recommendations"],
            serde_json::json!([
                "data analysis",
                "machine learning",
                "django",
                "music theory",
                "singing",
                "piano"
            ])
        );
        assert_eq!(result["skills"], serde_json::json!([" Python ", "guitar"]));
    }

    #[test]
    fn test_skips_known_and_duplicates() {
        let result = CatalogRecommender
            .recommend(&skills(&["spanish", "french"]))
            .unwrap();

        assert_eq!(
            result["recommendations"],
            serde_json::json!(["public speaking", "italian"])
        );
    }

    #[test]
    fn test_unknown_skill() {
        let result = CatalogRecommender.recommend(&skills(&["juggling"])).unwrap();
        assert_eq!(result["recommendations"], serde_json::json!([]));
    }
}
