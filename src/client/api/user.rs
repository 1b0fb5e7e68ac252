use crate::{
    client::{
        api::{path, transport},
        error::ApiError,
    },
    model::{
        api::{AuthResponseDto, MessageDto, UserResponseDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
};

/// Resolve the user behind the session cookie
pub async fn get_user() -> Result<UserDto, ApiError> {
    let response: UserResponseDto = transport::get(path::GET_USER).await?;

    Ok(response.user)
}

pub async fn login(body: &LoginDto) -> Result<AuthResponseDto, ApiError> {
    transport::post_json(path::LOGIN, body).await
}

pub async fn register(body: &RegisterDto) -> Result<AuthResponseDto, ApiError> {
    transport::post_json(path::REGISTER, body).await
}

pub async fn logout() -> Result<MessageDto, ApiError> {
    transport::get(path::LOGOUT).await
}
