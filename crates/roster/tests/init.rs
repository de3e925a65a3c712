use roster::domain::config::ApiConfig;
use roster::features;

#[test]
fn init_registers_the_users_slice() {
    let slices = roster::init(&ApiConfig::default()).expect("init should succeed");

    assert_eq!(slices.len(), 1);
    let users = slices[0].downcast_ref::<features::users::Users>().expect("users slice");
    assert_eq!(users.registry.len(), 3);
}

#[test]
fn seed_flag_is_honoured() {
    let mut config = ApiConfig::default();
    config.users.seed = false;

    let slices = roster::init(&config).expect("init should succeed");
    let users = slices[0].downcast_ref::<features::users::Users>().expect("users slice");
    assert!(users.registry.is_empty());
}

#[test]
fn users_feature_is_always_enabled() {
    assert!(features::is_enabled("users"));
    assert!(!features::is_enabled("billing"));
}

#[cfg(feature = "server")]
#[test]
fn api_router_documents_system_and_user_routes() {
    let (_, doc) = roster::server::router::api_router().split_for_parts();
    assert!(doc.paths.paths.contains_key("/health"));
    assert!(doc.paths.paths.contains_key("/users"));
    assert!(doc.paths.paths.contains_key("/users/{id}"));
}
