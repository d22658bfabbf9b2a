//! The twelve Earthly Branches (地支).

use crate::element::FiveElement;

/// The twelve Earthly Branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthlyBranch {
    /// 子
    Zi,
    /// 丑
    Chou,
    /// 寅
    Yin,
    /// 卯
    Mao,
    /// 辰
    Chen,
    /// 巳
    Si,
    /// 午
    Wu,
    /// 未
    Wei,
    /// 申
    Shen,
    /// 酉
    You,
    /// 戌
    Xu,
    /// 亥
    Hai,
}

/// All twelve branches in cycle order (index 0 = 子).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based cycle index, 子 = 0 through 亥 = 11.
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Display code of the numeric rendering: 子 = 4 through 申 = 12, then
    /// 酉 = 1, 戌 = 2, 亥 = 3.
    pub const fn code(self) -> u8 {
        (self.index() + 3) % 12 + 1
    }

    /// Branch at a 0-based cycle index.
    pub const fn from_index(index: u8) -> Option<EarthlyBranch> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Branch governing a clock hour. Each branch owns a two-hour window,
    /// with 子 covering 23:00 up to 01:00.
    pub const fn from_hour(hour: u8) -> Option<EarthlyBranch> {
        if hour > 23 {
            return None;
        }
        Self::from_index((hour + 1) / 2 % 12)
    }

    /// Element of the branch: 寅卯木, 巳午火, 申酉金, 子亥水, and the four
    /// earthen branches 辰戌丑未.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Yin | Self::Mao => FiveElement::Wood,
            Self::Si | Self::Wu => FiveElement::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => FiveElement::Earth,
            Self::Shen | Self::You => FiveElement::Metal,
            Self::Zi | Self::Hai => FiveElement::Water,
        }
    }
}
