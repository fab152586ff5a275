use std::str::FromStr;

const ENGLISH: [&str; 40] = [
    "Go", "Mediterranean Avenue", "Community Chest", "Baltic Avenue", "Income Tax",
    "Reading Railroad", "Oriental Avenue", "Chance", "Vermont Avenue", "Connecticut Avenue",
    "Jail", "St. Charles Place", "Electric Company", "States Avenue", "Virginia Avenue",
    "Pennsylvania Railroad", "St. James Place", "Community Chest", "Tennessee Avenue", "New York Avenue",
    "Free Parking", "Kentucky Avenue", "Chance", "Indiana Avenue", "Illinois Avenue",
    "B&O Railroad", "Atlantic Avenue", "Ventnor Avenue", "Water Works", "Marvin Gardens",
    "Go To Jail", "Pacific Avenue", "North Carolina Avenue", "Community Chest", "Pennsylvania Avenue",
    "Short Line", "Chance", "Park Place", "Luxury Tax", "Boardwalk",
];

const CHINESE: [&str; 40] = [
    "起点", "地中海大道", "社区基金", "波罗的海大道", "所得税",
    "东方铁路", "东方大道", "机会", "佛蒙特大道", "康涅狄格大道",
    "监狱", "圣查尔斯广场", "电力公司", "州大道", "弗吉尼亚大道",
    "宾夕法尼亚铁路", "圣詹姆斯广场", "社区基金", "田纳西大道", "纽约大道",
    "免费停车", "肯塔基大道", "机会", "印第安纳大道", "伊利诺伊大道",
    "B&O铁路", "大西洋大道", "文特诺大道", "自来水公司", "马文花园",
    "进监狱", "太平洋大道", "北卡罗来纳大道", "社区基金", "宾夕法尼亚大道",
    "短途铁路", "机会", "公园广场", "奢侈税", "博德沃克",
];

/// Language of the square names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Chinese,
}

impl Locale {
    /// Display name of the square at `index`. Never fails: indices past the
    /// board get a generic label instead.
    pub fn name_of(&self, index: usize) -> String {
        let (table, fallback) = match self {
            Locale::English => (&ENGLISH, "Square"),
            Locale::Chinese => (&CHINESE, "位置"),
        };
        match table.get(index) {
            Some(name) => name.to_string(),
            None => format!("{} {}", fallback, index),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "zh" | "chinese" => Ok(Locale::Chinese),
            other => Err(format!("unknown locale '{}', expected 'en' or 'zh'", other)),
        }
    }
}

/// English name of the square at `index`, see [`Locale::name_of`].
pub fn name_of(index: usize) -> String {
    Locale::English.name_of(index)
}

/// Cuts a name down to at most `max_chars` characters for drawing inside a cell.
pub fn short_label(name: &str, max_chars: usize) -> &str {
    match name.char_indices().nth(max_chars) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}
