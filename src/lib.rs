//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___|  ___  _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _  / _ \| '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| ||  __/| | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____| \___||_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-16
// Version : 0.1.0
// License : Mulan PSL v2
//
// Random password generator with a heuristic strength indicator.

pub mod charset;
pub mod commands;
pub mod configtool;
pub mod error;
pub mod logger;
pub mod passgen;
pub mod session;
pub mod setclip;
pub mod strength;

pub use charset::{build_charset, CharClass, Charset, GenerationConfig};
pub use error::PassGenError;
pub use passgen::{generate, Password};
pub use strength::{score, StrengthBands, StrengthLevel};
