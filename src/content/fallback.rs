use super::{ContentError, QuizQuestion};

/// Riddle shown when the provider answers with an empty string.
pub const RIDDLE_EMPTY_RESPONSE: &str = "这也是一种神奇的形状！";

/// Riddle shown when the provider fails outright.
pub const RIDDLE_UNAVAILABLE: &str = "它是方方正正的，还是圆圆滚滚的呢？猜猜看！";

fn question(text: &str, options: [&str; 4], answer: &str, explanation: &str) -> QuizQuestion {
    QuizQuestion {
        question: text.to_owned(),
        options: options.iter().map(|o| (*o).to_owned()).collect(),
        correct_answer: answer.to_owned(),
        explanation: explanation.to_owned(),
    }
}

fn builtin_questions() -> Vec<QuizQuestion> {
    vec![
        question(
            "下面哪个物体是圆柱体？",
            ["篮球", "魔方", "可乐罐", "雪糕筒"],
            "可乐罐",
            "可乐罐上下一样粗，上下都是圆圆的平面，侧面是曲面。",
        ),
        question(
            "魔方是什么形状的？",
            ["长方体", "正方体", "球体", "圆锥体"],
            "正方体",
            "魔方的六个面都是一样大的正方形，所以它是正方体。",
        ),
        question(
            "下面哪个形状最容易滚动？",
            ["正方体", "长方体", "球体", "圆锥体"],
            "球体",
            "球体圆圆滚滚的，没有平平的面，所以最容易滚动。",
        ),
        question(
            "生日帽通常是什么形状？",
            ["圆柱体", "圆锥体", "正方体", "球体"],
            "圆锥体",
            "生日帽底面是圆的，上面是尖尖的，这是圆锥体的特点。",
        ),
        question(
            "牙膏盒通常是什么形状？",
            ["正方体", "长方体", "圆柱体", "球体"],
            "长方体",
            "牙膏盒长长方方的，相对的面一样大，是长方体。",
        ),
    ]
}

/// Pre-authored questions served in rotation when the provider fails.
#[derive(Debug, Clone)]
pub struct FallbackPool {
    questions: Vec<QuizQuestion>,
    cursor: usize,
}

impl FallbackPool {
    /// Pool over `questions`. Every question must pass validation and the
    /// pool must not be empty.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, ContentError> {
        if questions.is_empty() {
            return Err(ContentError::InvalidQuestion("fallback pool is empty"));
        }
        for q in &questions {
            q.validate()?;
        }
        Ok(Self {
            questions,
            cursor: 0,
        })
    }

    /// Next question, wrapping around after the last.
    pub fn next_question(&mut self) -> QuizQuestion {
        let question = self.questions[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.questions.len();
        question
    }

    /// Number of questions in rotation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; construction rejects empty pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for FallbackPool {
    fn default() -> Self {
        Self {
            questions: builtin_questions(),
            cursor: 0,
        }
    }
}
