//! Trimmed-down snapshots of the portal pages used across unit tests.

pub(crate) const ROSTER_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="report">
  <table class="table ng-scope callings-table">
    <thead>
      <tr><th>Name</th><th>Organization</th><th>Calling</th><th>Sustained</th><th>Set Apart</th></tr>
    </thead>
    <tbody>
      <tr>
        <td class="first n fn"><a href="https://lcr.churchofjesuschrist.org/records/member-profile/111111?lang=eng">Smith, John Michael</a></td>
        <td class="hidden-phone organization ng-binding">Primary</td>
        <td class="position ng-binding">Primary Teacher</td>
        <td class="hidden-phone sustained nowrap ng-binding">04 Mar 2023</td>
        <td class="hidden-phone set-apart"><img src="/images/check.png"></td>
      </tr>
      <tr>
        <td class="first n fn"><a href="https://lcr.churchofjesuschrist.org/records/member-profile/222222?lang=eng">Jones, Mary</a></td>
        <td class="hidden-phone organization ng-binding">Primary</td>
        <td class="position ng-binding">Primary Activities Leader</td>
        <td class="hidden-phone sustained nowrap ng-binding">15 Jan 2024</td>
        <td class="hidden-phone set-apart"></td>
      </tr>
      <tr>
        <td class="first n fn"><a href="https://lcr.churchofjesuschrist.org/records/member-profile/333333?lang=eng">Brown, Alice Marie</a></td>
        <td class="hidden-phone organization ng-binding">Sunday School</td>
        <td class="position ng-binding">Sunday School Teacher</td>
        <td class="hidden-phone sustained nowrap ng-binding">01 Sep 2022</td>
        <td class="hidden-phone set-apart"><img src="/images/check.png"></td>
      </tr>
      <tr>
        <td class="first n fn"><a href="https://lcr.churchofjesuschrist.org/records/member-profile/444444?lang=eng">Taylor, Sam</a></td>
        <td class="hidden-phone organization ng-binding">Bishopric</td>
        <td class="position ng-binding">Bishop</td>
        <td class="hidden-phone sustained nowrap ng-binding"></td>
        <td class="hidden-phone set-apart"><img src="/images/check.png"></td>
      </tr>
      <tr>
        <td class="first n fn"><a href="https://lcr.churchofjesuschrist.org/records/member-profile/555555?lang=eng">Green, Pat</a></td>
        <td class="hidden-phone organization ng-binding">Sunday School</td>
        <td class="position ng-binding">Sunday School Teacher</td>
        <td class="hidden-phone sustained nowrap ng-binding">10 Oct 2021</td>
        <td class="hidden-phone set-apart"></td>
      </tr>
      <tr>
        <td class="first n fn"><a href="https://lcr.churchofjesuschrist.org/records/member-profile/666666?lang=eng">White, Dana</a></td>
        <td class="hidden-phone organization ng-binding">Primary</td>
        <td class="position ng-binding">Primary Teacher</td>
        <td class="hidden-phone sustained nowrap ng-binding">07 Jun 2020</td>
        <td class="hidden-phone set-apart"><img src="/images/check.png"></td>
      </tr>
    </tbody>
  </table>
</div>
</body>
</html>
"#;

pub(crate) const PRIMARY_ORG_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<header>
  <a ng-click="selectAllOrgs()">All Organizations</a>
  <a href="/records/member-profile/666666?lang=eng">White, Dana</a>
</header>
<sub-org>
  <div class="sub-org-header"><h2> Nursery </h2></div>
  <ul><li><a href="/records/member-profile/222222?lang=eng">Jones, Mary</a></li></ul>
</sub-org>
<sub-org>
  <div class="sub-org-header"><h2>Primary Activities B</h2></div>
  <ul><li><a href="/records/member-profile/111111?lang=eng">Smith, John</a></li></ul>
</sub-org>
<sub-org>
  <div class="sub-org-header"><h2>Valiant 9</h2></div>
  <ul><li><a href="/records/member-profile/111111?lang=eng">Smith, John</a></li></ul>
</sub-org>
<sub-org>
  <div class="sub-org-header"><h2>Primary Activities A</h2></div>
  <ul><li><a href="/records/member-profile/222222?lang=eng">Jones, Mary</a></li></ul>
</sub-org>
<sub-org>
  <div class="sub-org-header"><h2>Sunbeam</h2></div>
  <ul><li><a href="/records/member-profile/111111?lang=eng">Smith, John</a></li></ul>
</sub-org>
</body>
</html>
"#;

pub(crate) const SUNDAY_SCHOOL_ORG_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<header><a ng-click="selectAllOrgs()">All Organizations</a></header>
<sub-org>
  <div class="sub-org-header"><h2>Course 14</h2></div>
  <ul><li><a href="/records/member-profile/333333?lang=eng">Brown, Alice</a></li></ul>
</sub-org>
<sub-org>
  <div class="sub-org-header"><h2>Gospel Doctrine</h2></div>
  <ul><li><a href="/records/member-profile/333333?lang=eng">Brown, Alice</a></li></ul>
</sub-org>
</body>
</html>
"#;
