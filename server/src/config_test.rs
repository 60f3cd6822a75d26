use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("STATIC_DIR");
    }
}

#[test]
fn from_env_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.static_dir, PathBuf::from("public"));
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", " 8080 ");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("STATIC_DIR", "/srv/tablekit");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/tablekit"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    assert_eq!(ServerConfig::from_env(), Err(ConfigError::InvalidPort("eighty".to_owned())));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_port_out_of_range() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "70000");
    }

    assert!(matches!(ServerConfig::from_env(), Err(ConfigError::InvalidPort(_))));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_bind_addr() {
    unsafe {
        clear_server_env();
        std::env::set_var("BIND_ADDR", "localhost");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR: localhost");

    unsafe { clear_server_env() };
}

#[test]
fn ipv6_bind_addr_formats_with_brackets() {
    let cfg = ServerConfig { bind_addr: "::1".parse().unwrap(), port: 3000, static_dir: PathBuf::from("public") };
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}
