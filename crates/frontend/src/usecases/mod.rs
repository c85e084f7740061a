pub mod u001_submit_application;
