use rand::rngs::StdRng;
use rand::SeedableRng;

use super::fallback::{RIDDLE_EMPTY_RESPONSE, RIDDLE_UNAVAILABLE};
use super::{
    parse_quiz_response, ContentProvider, ContentRequest, FallbackPool, QuizQuestion,
    QuizScenario,
};
use crate::shape::ShapeClass;

/// Wraps a [`ContentProvider`] with riddle caching for the selected shape
/// and fallback substitution.
pub struct ContentService<P> {
    provider: P,
    fallback: FallbackPool,
    /// Riddle of the last selected shape, if it was generated.
    riddle: Option<(ShapeClass, String)>,
    rng: StdRng,
}

impl<P: ContentProvider> ContentService<P> {
    /// Service with the built-in fallback pool and an OS-seeded scenario
    /// picker.
    pub fn new(provider: P) -> Self {
        Self::with_rng(provider, StdRng::from_os_rng())
    }

    /// Service with an explicit scenario picker, for reproducible runs.
    pub fn with_rng(provider: P, rng: StdRng) -> Self {
        Self {
            provider,
            fallback: FallbackPool::default(),
            riddle: None,
            rng,
        }
    }

    /// Replace the fallback pool.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Riddle for `shape`.
    ///
    /// Selecting the same shape again returns the cached riddle; selecting
    /// any other shape replaces it with a freshly generated one. Fallback
    /// riddles are never cached.
    pub fn riddle(&mut self, shape: ShapeClass) -> String {
        if let Some((cached_shape, text)) = &self.riddle {
            if *cached_shape == shape {
                return text.clone();
            }
        }
        self.riddle = None;
        match self.provider.generate(&ContentRequest::Riddle { shape }) {
            Ok(text) if !text.trim().is_empty() => {
                let text = text.trim().to_owned();
                self.riddle = Some((shape, text.clone()));
                text
            }
            Ok(_) => {
                log::warn!("empty riddle for {shape}, using fallback");
                RIDDLE_EMPTY_RESPONSE.to_owned()
            }
            Err(e) => {
                log::warn!("riddle for {shape} unavailable ({e}), using fallback");
                RIDDLE_UNAVAILABLE.to_owned()
            }
        }
    }

    /// A fresh quiz question in a randomly chosen scenario, or the next
    /// fallback question when the provider fails or answers badly.
    pub fn quiz_question(&mut self) -> QuizQuestion {
        let scenario = QuizScenario::random(&mut self.rng);
        let request = ContentRequest::Quiz { scenario };
        match self
            .provider
            .generate(&request)
            .and_then(|text| parse_quiz_response(&text))
        {
            Ok(question) => question,
            Err(e) => {
                log::warn!("quiz question unavailable ({e}), using fallback");
                self.fallback.next_question()
            }
        }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::content::{ContentError, OfflineProvider};

    type Reply = Result<String, ContentError>;

    fn seeded<P: ContentProvider>(provider: P) -> ContentService<P> {
        ContentService::with_rng(provider, StdRng::seed_from_u64(1))
    }

    fn replying(text: &'static str) -> impl FnMut(&ContentRequest) -> Reply {
        move |_| Ok(text.to_owned())
    }

    #[test]
    fn riddle_is_kept_only_for_the_selected_shape() {
        let calls = Cell::new(0);
        let mut service = seeded(|_: &ContentRequest| -> Reply {
            calls.set(calls.get() + 1);
            Ok(format!(" riddle {} \n", calls.get()))
        });
        assert_eq!(service.riddle(ShapeClass::Cube), "riddle 1");
        assert_eq!(service.riddle(ShapeClass::Cube), "riddle 1");
        assert_eq!(calls.get(), 1);

        assert_eq!(service.riddle(ShapeClass::Cone), "riddle 2");
        assert_eq!(service.riddle(ShapeClass::Cube), "riddle 3");
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn fallback_riddle_clears_the_cache() {
        let calls = Cell::new(0);
        let mut service = seeded(|_: &ContentRequest| -> Reply {
            calls.set(calls.get() + 1);
            if calls.get() == 2 {
                Err(ContentError::EmptyResponse)
            } else {
                Ok("我有六个面".to_owned())
            }
        });
        let _ = service.riddle(ShapeClass::Cube);
        assert_eq!(service.riddle(ShapeClass::Cylinder), RIDDLE_UNAVAILABLE);
        assert_eq!(service.riddle(ShapeClass::Cylinder), "我有六个面");
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn riddle_fallbacks_distinguish_empty_from_failure() {
        let mut empty = seeded(replying("   "));
        assert_eq!(empty.riddle(ShapeClass::Sphere), RIDDLE_EMPTY_RESPONSE);

        let mut offline = seeded(OfflineProvider);
        assert_eq!(offline.riddle(ShapeClass::Sphere), RIDDLE_UNAVAILABLE);
    }

    #[test]
    fn quiz_uses_provider_when_valid() {
        let mut service = seeded(|request: &ContentRequest| -> Reply {
            assert!(request.expects_json());
            Ok(concat!(
                "```json\n",
                r#"{"question":"哪个能滚？","options":["正方体","长方体","球体","圆锥体"],"#,
                r#""correctAnswer":"球体","explanation":"圆圆的。"}"#,
                "\n```",
            )
            .to_owned())
        });
        assert_eq!(service.quiz_question().correct_answer, "球体");
    }

    #[test]
    fn quiz_falls_back_in_rotation() {
        let mut service = seeded(|_: &ContentRequest| -> Reply {
            Err(ContentError::Provider("quota".to_owned()))
        });
        let mut pool = FallbackPool::default();
        for _ in 0..7 {
            assert_eq!(service.quiz_question(), pool.next_question());
        }
    }

    #[test]
    fn malformed_quiz_falls_back() {
        let mut service = seeded(replying("{\"question\": 3}"));
        let first = FallbackPool::default().next_question();
        assert_eq!(service.quiz_question(), first);
    }
}
