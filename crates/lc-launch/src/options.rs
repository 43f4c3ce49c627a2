/// Everything a launcher needs for one launch attempt.
///
/// Built fresh for every attempt and handed to the launcher by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub version: String,
    /// Look for the runtime shipped with Lunar Client instead of `custom_jre`.
    pub find_lunar_jre: bool,
    /// Path to a `java` executable. Empty when `find_lunar_jre` is set.
    pub custom_jre: String,
    pub jvm_args: String,
    pub agents: Vec<String>,
    pub cosmetics: bool,
    /// MiB
    pub initial_memory: u32,
    /// MiB
    pub max_memory: u32,
    pub window_width: u32,
    pub window_height: u32,
}
