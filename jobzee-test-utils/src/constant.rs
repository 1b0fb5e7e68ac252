pub const EMPLOYER_ID: &str = "6651f0c2a1b2c3d4e5f60001";
pub const JOB_SEEKER_ID: &str = "6651f0c2a1b2c3d4e5f60002";
pub const JOB_ID: &str = "6651f0c2a1b2c3d4e5f60010";
pub const APPLICATION_ID: &str = "6651f0c2a1b2c3d4e5f60020";
pub const RESUME_URL: &str = "https://res.cloudinary.com/jobzee/image/upload/resume.png";
