use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Profile,
    Settings,
    Help,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Profile, Panel::Settings, Panel::Help];

    pub fn text(&self) -> &'static str {
        match self {
            Panel::Profile => "User profile panel",
            Panel::Settings => "Settings panel",
            Panel::Help => "Help and support",
        }
    }
}

impl FromStr for Panel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "profile" => Ok(Panel::Profile),
            "settings" => Ok(Panel::Settings),
            "help" => Ok(Panel::Help),
            other => Err(format!(
                "unknown panel '{}', expected profile, settings or help",
                other
            )),
        }
    }
}

/// 三個互不相關的顯示開關
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    pub profile: bool,
    pub settings: bool,
    pub help: bool,
}

impl PanelState {
    fn flag_mut(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Profile => &mut self.profile,
            Panel::Settings => &mut self.settings,
            Panel::Help => &mut self.help,
        }
    }

    pub fn toggle(&mut self, panel: Panel) -> bool {
        let flag = self.flag_mut(panel);
        *flag = !*flag;
        *flag
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Profile => self.profile,
            Panel::Settings => self.settings,
            Panel::Help => self.help,
        }
    }

    pub fn open_panels(&self) -> impl Iterator<Item = Panel> + '_ {
        Panel::ALL.into_iter().filter(|panel| self.is_open(*panel))
    }
}

/// 語言選單僅供顯示，不影響任何文字
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    German,
    Korean,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::German,
        Language::Korean,
    ];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Korean => "Korean",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let options: Vec<String> = Language::ALL.iter().map(|l| l.to_string()).collect();
                format!("unknown language '{}', expected one of {}", s, options.join(", "))
            })
    }
}
