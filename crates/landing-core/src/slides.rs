/// Bonus block shown at the bottom of a schedule card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bonus {
    pub label: &'static str,
    pub text: &'static str,
}

/// One carousel page: a month's subscription schedule.
///
/// Fields:
/// - `month`: short month name, used for logging and accessibility labels
/// - `subtitle`/`title`/`tagline`: card heading lines, top to bottom
/// - `items`: bullet list, rendered in order
/// - `bonus`: highlighted bonus video block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub month: &'static str,
    pub subtitle: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub items: &'static [&'static str],
    pub bonus: Bonus,
}

const EVERY_MONTH_NEW_TOPIC: &str = "КОЖНОГО МІСЯЦЯ НОВА ТЕМА";

/// Monthly schedules in carousel order.
pub const SCHEDULE: &[Slide] = &[
    Slide {
        month: "ГРУДЕНЬ",
        subtitle: EVERY_MONTH_NEW_TOPIC,
        title: "РОЗКЛАД НА ГРУДЕНЬ",
        tagline: "Підсумки року з турботою про себе",
        items: &[
            "12 тренувань зі стрейчингу з поясненням кожної вправи",
            "4 психологічні сесії з практичними завданнями",
            "4 астрологічні прогнози на тиждень",
            "2 гороскопи на новолуння та повнолуння",
            "Готовий план харчування на тиждень",
            "Різдвяне меню: 12 корисних страв для святкового столу",
        ],
        bonus: Bonus {
            label: "БОНУСНЕ ВІДЕО ГРУДНЯ:",
            text: "Визначаємо свій Асцендент і розбираємо для кожного знака Зодіака",
        },
    },
    Slide {
        month: "СІЧЕНЬ",
        subtitle: EVERY_MONTH_NEW_TOPIC,
        title: "РОЗКЛАД НА СІЧЕНЬ",
        tagline: "Новий старт із мудрістю і вірою в себе",
        items: &[
            "12 тренувань зі стрейчингу з поясненням кожної вправи",
            "4 психологічні сесії з практичними завданнями",
            "4 астрологічні прогнози на тиждень",
            "2 гороскопи на новолуння та повнолуння",
            "Готові плани харчування на тиждень",
        ],
        bonus: Bonus {
            label: "БОНУСНЕ ВІДЕО СІЧНЯ:",
            text: "Сонце у натальній карті: твоя життєва місія і внутрішнє світло",
        },
    },
    Slide {
        month: "ЛЮТИЙ",
        subtitle: EVERY_MONTH_NEW_TOPIC,
        title: "РОЗКЛАД НА ЛЮТИЙ",
        tagline: "Про любов до себе і до життя",
        items: &[
            "12 тренувань зі стрейчингу з поясненням кожної вправи",
            "Психологічні практики та челенджі",
            "4 астрологічні прогнози на тиждень",
            "2 гороскопи на новолуння та повнолуння",
            "Готові плани харчування на тиждень",
        ],
        bonus: Bonus {
            label: "БОНУСНЕ ВІДЕО ЛЮТОГО:",
            text: "Місяць в натальній карті: про внутрішній світ, емоції, інстинкти та підсвідомість",
        },
    },
];

/// Call-to-action label under every card.
pub const SLIDE_CTA_LABEL: &str = "Купити підписку на місяць";
/// Anchor the call-to-action scrolls to.
pub const SLIDE_CTA_HREF: &str = "#form";
