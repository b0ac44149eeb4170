pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;

    pub mod holiday {
        pub mod holidayrecord;
        pub mod holidaysource;
        pub mod holidaycache;
    }

    pub mod calendar {
        pub mod territory;
        pub mod territorycalendar;
        pub mod businessday;
    }
}
