use std::rc::Rc;

use common::ForecastService;
use yew::prelude::*;

use crate::api_client::HttpForecastService;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// The service every component talks to. One instance per component.
#[hook]
pub fn use_forecast_service() -> Rc<dyn ForecastService> {
    let service = use_memo((), |_| {
        Rc::new(HttpForecastService) as Rc<dyn ForecastService>
    });
    (*service).clone()
}
