use config::{Config, File};
use failure;

use std::sync::RwLock;

lazy_static! {
    #[allow(missing_debug_implementations)]
    pub static ref SETTINGS: RwLock<Settings> = RwLock::new(Settings::default());
}

#[macro_export]
macro_rules! get_settings {
    () => {
        $crate::settings::SETTINGS.read().unwrap()
    };
}

pub fn init() -> Result<(), failure::Error> {
    debug!("Initializing settings");
    let mut settings = SETTINGS.write().unwrap();

    let mut c = Config::new();
    c.merge(File::with_name("Settings.toml"))?;
    *settings = c.try_into::<Settings>()?;

    Ok(())
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    pub authentication: Authentication,
    pub tokens: Tokens,
    pub merge_codes: MergeCodes,
}

#[derive(Debug, Default, Deserialize)]
pub struct Authentication {
    pub secret: String,
}

#[derive(Debug, Deserialize)]
pub struct Tokens {
    pub expires_in: u16,
}

impl Default for Tokens {
    fn default() -> Self {
        Tokens { expires_in: 300 }
    }
}

#[derive(Debug, Deserialize)]
pub struct MergeCodes {
    pub expires_in: i64,
}

impl Default for MergeCodes {
    fn default() -> Self {
        MergeCodes { expires_in: 3600 }
    }
}
