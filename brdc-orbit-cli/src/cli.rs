use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};
use std::str::FromStr;

use brdc_orbit::prelude::{Epoch, Sampling, SV};

use crate::Error;

pub struct Cli {
    /// Arguments passed by user
    matches: ArgMatches,
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: {
                Command::new("brdc-orbit")
                    .author("F. Ahmadzade")
                    .version(env!("CARGO_PKG_VERSION"))
                    .about("Satellite trajectories from broadcast ephemerides")
                    .arg_required_else_help(true)
                    .color(ColorChoice::Always)
                    .arg(Arg::new("ephemeris")
                        .short('f')
                        .long("ephemeris")
                        .value_name("FILE")
                        .action(ArgAction::Append)
                        .required_unless_present("directory")
                        .help("Input ephemeris file (JSON). You can load as many as you want."))
                    .arg(Arg::new("directory")
                        .short('d')
                        .long("dir")
                        .value_name("DIRECTORY")
                        .required_unless_present("ephemeris")
                        .help("Load directory recursively. JSON files are identified
and added like they were individually imported with -f."))
                    .arg(Arg::new("sv")
                        .long("sv")
                        .value_name("SV")
                        .action(ArgAction::Append)
                        .help("Propagate this satellite only, for example --sv G05.
All satellites are propagated by default."))
                    .arg(Arg::new("epoch")
                        .short('e')
                        .long("epoch")
                        .value_name("EPOCH")
                        .help("Start of the propagation window, for example \"2021-09-15T00:00:00 GPST\".
Defaults to the median time of issue of each satellite."))
                .next_help_heading("Sampling")
                    .arg(Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("SECONDS")
                        .value_parser(value_parser!(f64))
                        .help("Sampling interval in seconds (30s by default)."))
                    .arg(Arg::new("duration")
                        .long("duration")
                        .value_name("SECONDS")
                        .value_parser(value_parser!(f64))
                        .help("Propagation duration in seconds (23h59'59'' by default)."))
                .next_help_heading("Output")
                    .arg(Arg::new("csv")
                        .long("csv")
                        .value_name("FILE")
                        .help("Export ECEF coordinates (time,x,y,z in meters) to CSV.
When several satellites are propagated, one file per satellite is generated."))
                    .arg(Arg::new("html")
                        .long("html")
                        .value_name("FILE")
                        .help("Render the 3D trajectories to HTML."))
                    .arg(Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .action(ArgAction::SetTrue)
                        .help("Disable all terminal output."))
                    .get_matches()
            },
        }
    }
    /// Returns input base dir
    pub fn input_base_dir(&self) -> Option<&String> {
        self.matches.get_one::<String>("directory")
    }
    /// Returns individual input filepaths
    pub fn input_files(&self) -> Vec<&String> {
        if let Some(fp) = self.matches.get_many::<String>("ephemeris") {
            fp.collect()
        } else {
            Vec::new()
        }
    }
    /// Returns satellites selected by user
    pub fn sv(&self) -> Result<Vec<SV>, Error> {
        if let Some(sv) = self.matches.get_many::<String>("sv") {
            sv.map(|sv| SV::from_str(sv.trim()).map_err(|_| Error::InvalidSV(sv.to_string())))
                .collect()
        } else {
            Ok(Vec::new())
        }
    }
    /// Returns propagation start time, if manually defined
    pub fn epoch(&self) -> Result<Option<Epoch>, Error> {
        match self.matches.get_one::<String>("epoch") {
            Some(t) => Epoch::from_str(t.trim())
                .map(Some)
                .map_err(|_| Error::InvalidEpoch(t.to_string())),
            None => Ok(None),
        }
    }
    /// Returns [Sampling] customized by user
    pub fn sampling(&self) -> Sampling {
        let mut sampling = Sampling::default();
        if let Some(interval) = self.matches.get_one::<f64>("interval") {
            sampling = sampling.with_interval_s(*interval);
        }
        if let Some(duration) = self.matches.get_one::<f64>("duration") {
            sampling = sampling.with_duration_s(*duration);
        }
        sampling
    }
    /// Returns CSV output path
    pub fn csv_path(&self) -> Option<&String> {
        self.matches.get_one::<String>("csv")
    }
    /// Returns HTML output path
    pub fn html_path(&self) -> Option<&String> {
        self.matches.get_one::<String>("html")
    }
    /// Returns true if quiet mode is activated
    pub fn quiet(&self) -> bool {
        self.matches.get_flag("quiet")
    }
}
