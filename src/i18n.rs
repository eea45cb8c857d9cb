/// Languages the site is written in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Fr];

    /// Picks the variant matching this language.
    pub fn pick<T>(self, en: T, fr: T) -> T {
        match self {
            Lang::En => en,
            Lang::Fr => fr,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    /// Accessible label of the button switching to this language.
    pub fn switch_label(self) -> &'static str {
        match self {
            Lang::En => "Switch to English",
            Lang::Fr => "Basculer en français",
        }
    }
}

/// A string available in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub fr: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, fr: &'static str) -> Self {
        Self { en, fr }
    }

    /// Same text in both languages.
    pub const fn same(s: &'static str) -> Self {
        Self { en: s, fr: s }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        lang.pick(self.en, self.fr)
    }
}
