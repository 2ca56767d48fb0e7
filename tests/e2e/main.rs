mod helpers;
mod test_catalog;
mod test_health;
mod test_views;
