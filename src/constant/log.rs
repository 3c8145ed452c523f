pub const ERR_NEED_A_TEAMCITY_URL: &str = "Need a teamcity url.";
pub const ERR_NEED_A_TEAMCITY_USERNAME: &str = "Need your teamcity username.";
pub const ERR_NEED_A_TEAMCITY_PWD: &str = "Need your teamcity password.";
pub const ERR_TEAMCITY_CLIENT_INVALID: &str =
    "Cannot connect to teamcity. Maybe you should check your url, username or password.";
pub const ERR_TEAMCITY_UNEXPECTED_STATUS: &str = "TeamCity responded with an unexpected status.";
pub const ERR_CONFIG_NOT_FOUND: &str = "No config found. Run `tcb login` first.";

pub const HINT_NO_BUILDS: &str = "There is no build matching the query.";
pub const HINT_NOT_SET: &str = "(not set)";
pub const HINT_BUILD_LINE: &str = "#{} [{}] {} {} {}% {}";
pub const HINT_BUILD_TIMES: &str = "    started {}, finished {}";
pub const HINT_CONFIG_PATH: &str = "config: {}";
pub const HINT_CONFIG_LINE: &str = "{} = {}";

pub const LOGIN_SUCCESS_BY_PWD: &str = "Login success by password!";
pub const LOGIN_SUCCESS_AS_GUEST: &str = "Login success as guest!";
pub const QUERYING_BUILDS: &str = "Querying builds of {}...";
