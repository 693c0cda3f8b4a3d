use super::{ChoiceQuestion, QuizOption};

pub const INTRO: &str = "----------------------------------------------------------\n\
Hello! Welcome to the Smart Styler.\n\
I will choose an outfit for you based on your personality!\n\
Ready? Press enter to get started.\n\
----------------------------------------------------------\n";

pub const NAME_QUESTION: &str = "--> First off, what is your name? ";

pub const RESTART_QUESTION: &str = "--> Would you like to take the quiz again?\ny for yes, n for no ";

pub const GENDER_QUESTION: ChoiceQuestion = ChoiceQuestion {
    note: Some(
        "(For all questions, please type the corresponding letter in lowercase to choose an answer.)",
    ),
    heading: "What gender matches your style preference the most?",
    options: &[
        QuizOption::new('f', "feminine"),
        QuizOption::new('m', "masculine"),
    ],
};

pub const COLOR_QUESTION: ChoiceQuestion = ChoiceQuestion {
    note: None,
    heading: "What color palette are you drawn to the most?",
    options: &[
        QuizOption::new('a', "Cool colors: blues, greens, purples"),
        QuizOption::new('b', "Warm colors: reds, oranges, yellows"),
        QuizOption::new('c', "Neutral colors: black, white, browns"),
    ],
};

pub const STYLE_QUESTIONS: [ChoiceQuestion; 3] = [
    ChoiceQuestion {
        note: None,
        heading: "Choose the list of words that best describe you.",
        options: &[
            QuizOption::new('a', "calm, homebody, laid back"),
            QuizOption::new('b', "hard worker, motivated, classy"),
            QuizOption::new('c', "upbeat, creative, free-spirit"),
        ],
    },
    ChoiceQuestion {
        note: None,
        heading: "Pick your perfect night out.",
        options: &[
            QuizOption::new('a', "Night out? More like night in... binging my favorite show."),
            QuizOption::new(
                'b',
                "Fancy dinner, pampering myself, and a book/podcast before bed.",
            ),
            QuizOption::new(
                'c',
                "Watching a band perform live (probably one you've never heard of).",
            ),
        ],
    },
    ChoiceQuestion {
        note: None,
        heading: "Choose your ideal job.",
        options: &[
            QuizOption::new('a', "Working from home (while keeping an eye on my kids/pets)"),
            QuizOption::new('b', "CEO/founder of a corporation"),
            QuizOption::new('c', "Director of an art museum"),
        ],
    },
];

/// Asked only when the three style answers are all different
pub const TIEBREAKER_QUESTION: ChoiceQuestion = ChoiceQuestion {
    note: None,
    heading: "What brings you the most joy?",
    options: &[
        QuizOption::new('a', "Spending time with friends and family."),
        QuizOption::new(
            'b',
            "Checking things off my to-do list, feeling accomplished for the day.",
        ),
        QuizOption::new('c', "Creating/viewing art and/or music."),
    ],
};

pub fn greeting(name: &str) -> String {
    format!("Nice to meet you, {}.", name)
}

pub fn results_intro(name: &str) -> String {
    format!(
        "Okay, {}! I think I got everything I need, give me a moment. :)",
        name
    )
}
