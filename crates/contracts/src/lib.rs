//! Контракты данных, общие для frontend и API сервера

pub mod domain;
