pub const CONFIG_FILE_NAME: &str = ".tc-builds.toml";
pub const BUILD_COUNT: i32 = 10;
/// chars of the password left readable when the config is printed.
pub const PWD_VISIBLE_CHARS: usize = 0;
