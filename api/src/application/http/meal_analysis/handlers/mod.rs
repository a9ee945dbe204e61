pub mod analyze_meal;
