use std::sync::LazyLock;

use dass_core::models::Subscale;

use crate::Instrument;
use crate::bank::{OptionSet, Question, QuestionBank};
use crate::cutoffs::CutoffTable;

/// Short-form Depression, Anxiety and Stress scales (inspired by DASS-21).
/// 21 items, 7 per subscale, each rated 0-3. Subscale sums are doubled.
pub struct Dass21;

static BANK: LazyLock<QuestionBank> = LazyLock::new(|| {
    use Subscale::{Anxiety as A, Depression as D, Stress as S};

    let items = [
        (
            S,
            "After an entire day of work, I cannot calm myself and unable see the beauty of life...",
        ),
        (
            A,
            "Even though I am not dehydrating, I feel my mouth getting all dried up. It feels parched, sticky and uncomfortable...",
        ),
        (
            D,
            "In a party full of people, I want to vibe around and enjoy the gathering just like others. Alas! I don't feel the energy even if I want to...",
        ),
        (
            A,
            "I feel suffocating, or unusually taking deep breaths, or often experience rapid breathing...",
        ),
        (
            D,
            "I want to start a hobby, or a business, or do better at my work to get the next promotion, or want to get better grades at school. But before I initiate anything, I just give up...",
        ),
        (
            S,
            "Recently, I have been reacting too quick to any minor inconvenience. Afterwards, I regret of doing it because I know it's not who I am...",
        ),
        (
            A,
            "Shaky hands pisses me off! I have been doing that for quite a while, can't finish any of my work properly because of it!",
        ),
        (
            S,
            "Small calculation, even while I am doing it with my fingers, makes me nervous. I am always worried about the inconvenient outcomes...",
        ),
        (
            A,
            "Suppose, everything in my life is going according to my way, but still I panic about the bad situation I could fall into. This fear strikes me so badly...",
        ),
        (
            D,
            "I don't see any future for myself... All I see is darkness there... Hopes lost in void...",
        ),
        (
            S,
            "My coworkers/classmates get the agitated attitude and restless behaviour from me, I don't do these intentionally...",
        ),
        (
            S,
            "Cannot chill and relax at all, feel like losing patience too quickly...",
        ),
        (
            D,
            "My spirit energy is so low that I always feel sad or melancholic...",
        ),
        (
            S,
            "Either I am impatient or get distracted too easily from whatever I have on my hand. This is hampering my daily-to-daily task...",
        ),
        (
            A,
            "Panic Attacks! I lose control over myself, my heart races too fast when it happens...",
        ),
        (
            D,
            "Almost nothing attracts me anymore. All those fun-times and hobbies died for me and abolished in the dull darkness...",
        ),
        (
            D,
            "I feel worthless, I question my capabilities, feel pathetic about myself...",
        ),
        (
            S,
            "I am emotionally fragile, too sensitive and get upset easily by minor comments and small actions/interruptions...",
        ),
        (
            A,
            "During normal situations, my heart beat just goes up and gives me anxiety about things that never occurred...",
        ),
        (
            A,
            "Things scare me no matter how small they are or even if they don't have any reason to do so...",
        ),
        (
            D,
            "Lost! Cannot find the meaning of life and going with the flow from zero expectations...",
        ),
    ];

    QuestionBank {
        options: OptionSet::new(["Never", "Sometimes", "Often", "Almost Always"]),
        questions: items
            .into_iter()
            .map(|(subscale, prompt)| Question {
                subscale,
                prompt: prompt.to_string(),
            })
            .collect(),
    }
});

static CUTOFFS: LazyLock<CutoffTable> = LazyLock::new(|| {
    CutoffTable::new([
        (Subscale::Depression, [10, 14, 21, 28]),
        (Subscale::Anxiety, [8, 10, 15, 20]),
        (Subscale::Stress, [15, 19, 26, 34]),
    ])
});

impl Instrument for Dass21 {
    fn id(&self) -> &str {
        "dass21"
    }

    fn name(&self) -> &str {
        "DASS-21"
    }

    fn bank(&self) -> &QuestionBank {
        &BANK
    }

    fn cutoffs(&self) -> &CutoffTable {
        &CUTOFFS
    }
}
