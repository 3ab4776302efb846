pub mod a101_project;
