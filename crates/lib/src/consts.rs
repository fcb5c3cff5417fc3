/// Application name, used for the binary and the config file name.
pub const APP_NAME: &str = "pibuild";

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILENAME: &str = "pibuild.toml";

/// Printed after the list of missing tools.
pub const INSTALL_HINT: &str = "sudo apt-get install gcc-arm-linux-gnueabihf";
