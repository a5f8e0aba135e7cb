//! Общие типы для frontend и backend: агрегаты, DTO, конверт ответа API,
//! функции агрегации для дашбордов и абстракция источника данных.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
