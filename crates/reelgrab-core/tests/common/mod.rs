pub mod fake_utility;
