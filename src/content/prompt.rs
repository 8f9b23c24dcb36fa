use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::shape::ShapeClass;

/// Angle a quiz question takes, rotated at random so consecutive
/// questions differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizScenario {
    /// Name an everyday object and ask for its shape.
    RealWorld,
    /// Describe faces, corners or tips and ask which shape it is.
    Features,
    /// Ask which shape rolls, stacks, or both.
    Action,
    /// Three objects share a shape; find the fourth.
    OddOneOut,
    /// Compare two shapes by a shared or missing feature.
    Compare,
}

impl QuizScenario {
    /// Every scenario.
    pub const ALL: [Self; 5] = [
        Self::RealWorld,
        Self::Features,
        Self::Action,
        Self::OddOneOut,
        Self::Compare,
    ];

    /// Pick one uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Instruction text embedded in the prompt.
    #[must_use]
    pub fn guidance(self) -> &'static str {
        match self {
            Self::RealWorld => {
                "REAL_WORLD: Name a specific common object (e.g., soda can, dice, \
                 orange, traffic cone, shoebox, tissue box) and ask what shape it is."
            }
            Self::Features => {
                "FEATURES: Describe specific features (e.g., 'I have 6 flat square \
                 faces', 'I have a pointy top and round bottom', 'I have no corners') \
                 and ask to identify the shape."
            }
            Self::Action => {
                "ACTION: Ask about physical properties like 'Which shape can roll \
                 easily?', 'Which shape can stack well?', 'Which shape can roll AND stack?'."
            }
            Self::OddOneOut => {
                "ODD_ONE_OUT: List 3 objects that are the same shape and 1 that is \
                 different, ask which one is different."
            }
            Self::Compare => {
                "COMPARE: Ask a simple comparison, e.g., 'Which shape has a round \
                 bottom like a Cylinder but a pointy top?'"
            }
        }
    }
}

/// Prompt for a short riddle describing `shape` without naming it.
#[must_use]
pub fn riddle_prompt(shape: ShapeClass) -> String {
    format!(
        "Output a simple, fun riddle for a Grade 1 student (approx 7 years old) \
         in Chinese about a \"{shape}\". The riddle should describe its features \
         (corners, rolling ability, flat faces) without naming it directly. \
         Keep it under 30 words. Do not include the answer."
    )
}

/// Prompt for one multiple-choice question in `scenario`, answered as JSON.
#[must_use]
pub fn quiz_prompt(scenario: QuizScenario) -> String {
    format!(
        "Generate a multiple-choice math question for a 1st grader (approx 7 years old) \
         about 3D shapes (Cube, Cuboid, Cylinder, Sphere, Cone).\n\n\
         Current Question Scenario: \"{}\"\n\n\
         Ensure the language is simple Chinese suitable for a 7-year-old.\n\n\
         Return strictly JSON matching this schema:\n\
         {{\n  \"question\": \"string (Chinese)\",\n  \
         \"options\": [\"string\", \"string\", \"string\", \"string\"],\n  \
         \"correctAnswer\": \"string (must be one of the options)\",\n  \
         \"explanation\": \"string (short explanation for a child)\"\n}}",
        scenario.guidance()
    )
}

/// What a provider is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentRequest {
    /// A riddle about one shape; the response is plain text.
    Riddle {
        /// Shape to describe.
        shape: ShapeClass,
    },
    /// A quiz question; the response is JSON.
    Quiz {
        /// Angle the question should take.
        scenario: QuizScenario,
    },
}

impl ContentRequest {
    /// Full prompt text for this request.
    #[must_use]
    pub fn prompt(&self) -> String {
        match *self {
            Self::Riddle { shape } => riddle_prompt(shape),
            Self::Quiz { scenario } => quiz_prompt(scenario),
        }
    }

    /// Whether the provider should be asked for a JSON response.
    #[must_use]
    pub fn expects_json(&self) -> bool {
        matches!(self, Self::Quiz { .. })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn riddle_prompt_names_shape() {
        let prompt = riddle_prompt(ShapeClass::Cylinder);
        assert!(prompt.contains("\"cylinder\""));
        assert!(prompt.contains("Do not include the answer"));
    }

    #[test]
    fn quiz_prompt_embeds_scenario_and_schema() {
        let prompt = quiz_prompt(QuizScenario::OddOneOut);
        assert!(prompt.contains("ODD_ONE_OUT"));
        assert!(prompt.contains("\"correctAnswer\""));
    }

    #[test]
    fn random_scenarios_cover_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..200 {
            let s = QuizScenario::random(&mut rng);
            let i = QuizScenario::ALL.iter().position(|x| *x == s).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn only_quiz_requests_expect_json() {
        assert!(ContentRequest::Quiz {
            scenario: QuizScenario::Action
        }
        .expects_json());
        assert!(!ContentRequest::Riddle {
            shape: ShapeClass::Cone
        }
        .expects_json());
    }
}
