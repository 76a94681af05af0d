// src/common/form.rs

use std::{fmt, str::FromStr};

use axum::{
    extract::{FromRequest, Request},
    Form,
};
use serde::{de, de::DeserializeOwned, Deserialize, Deserializer};

use crate::common::error::AppError;

/// `axum::Form` cuja rejeição (campo faltando, número inválido, content-type)
/// vira `AppError::InvalidForm` (400) em vez do 422 padrão do axum.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidForm(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// Formulários HTML mandam campos vazios como `""`. Aqui eles viram `None`.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}
