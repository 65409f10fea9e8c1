// Shared CSV fixtures for the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:05:00,2017-01-02 08:15:00,600,Canal St,Clark St,Subscriber,Male,1985.0
1,2017-01-31 23:50:00,2017-02-01 00:10:00,1200,Clark St,Canal St,Subscriber,Female,1990.0
2,2017-02-06 17:00:00,2017-02-06 17:30:00,1800,Canal St,Clark St,Customer,,
3,2017-03-07 08:20:00,2017-03-07 08:25:00,300,Lake Shore Dr,Canal St,Subscriber,Male,1985.0
";

pub const NEW_YORK_CITY: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-03 09:00:00,2017-01-03 09:10:00,600,W 21 St,E 17 St,Subscriber,Female,1970.0
1,2017-06-10 12:00:00,2017-06-10 12:20:00,1200,E 17 St,W 21 St,,Male,
";

// Washington publishes no demographics.
pub const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-04-05 07:00:00,2017-04-05 07:30:00,1800.0,Union Station,Lincoln Memorial,Customer
1,2017-04-06 07:00:00,2017-04-06 07:15:00,900.0,Union Station,Lincoln Memorial,Subscriber
2,2017-05-07 18:00:00,2017-05-07 18:05:00,300.0,Lincoln Memorial,Union Station,Subscriber
";

pub fn write_all(dir: &Path) {
    fs::write(dir.join("chicago.csv"), CHICAGO).unwrap();
    fs::write(dir.join("new_york_city.csv"), NEW_YORK_CITY).unwrap();
    fs::write(dir.join("washington.csv"), WASHINGTON).unwrap();
}
