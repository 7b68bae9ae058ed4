pub mod bubble_menu;
