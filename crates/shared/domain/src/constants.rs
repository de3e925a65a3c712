//! Wire-level strings shared by the API surface and its documentation.

/// `OpenAPI` tag for the users resource.
pub const USERS_TAG: &str = "Users";
/// `OpenAPI` tag for operational endpoints.
pub const SYSTEM_TAG: &str = "System";

/// Error payload returned for every lookup that matches no user.
pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
/// Confirmation payload returned after a successful delete.
pub const USER_DELETED: &str = "Usuario eliminado";
/// Error payload for a JSON body that cannot be read as a user payload.
pub const INVALID_PAYLOAD: &str = "Cuerpo de la petición inválido";
/// Error payload for faults the caller cannot fix.
pub const INTERNAL_ERROR: &str = "Error interno del servidor";

pub const API_TITLE: &str = "API de Usuarios";
pub const API_VERSION: &str = "1.0.0";
pub const API_DESCRIPTION: &str = "CRUD básico de usuarios";
