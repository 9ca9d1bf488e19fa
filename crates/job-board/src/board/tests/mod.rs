mod common;
mod facade;
mod routing;
