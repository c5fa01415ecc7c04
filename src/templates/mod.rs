pub mod index_page;
